//! Lead-capture wizard model
//!
//! The wizard walks through four steps. Steps 1-3 each gate the forward
//! action on their required fields being non-empty; step 4 only carries
//! optional contact preferences. Confirming step 4 hands out the completed
//! form exactly once and locks the wizard.

use serde::{Deserialize, Serialize};

/// Number of steps before submission
pub const TOTAL_STEPS: u8 = 4;

/// Contact and project details collected by the wizard
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub first_name: String,
    pub email: String,
    pub company_name: String,
    pub role: String,
    pub project_needs: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email_opt_in: bool,
    #[serde(default)]
    pub sms_opt_in: bool,
}

/// Text inputs of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    Email,
    CompanyName,
    Role,
    ProjectNeeds,
    Phone,
}

impl TextField {
    pub fn name(&self) -> &'static str {
        match self {
            TextField::FirstName => "firstName",
            TextField::Email => "email",
            TextField::CompanyName => "companyName",
            TextField::Role => "role",
            TextField::ProjectNeeds => "projectNeeds",
            TextField::Phone => "phone",
        }
    }
}

/// Marketing opt-in toggles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptIn {
    Email,
    Sms,
}

impl LeadForm {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::Email => &self.email,
            TextField::CompanyName => &self.company_name,
            TextField::Role => &self.role,
            TextField::ProjectNeeds => &self.project_needs,
            TextField::Phone => &self.phone,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FirstName => &mut self.first_name,
            TextField::Email => &mut self.email,
            TextField::CompanyName => &mut self.company_name,
            TextField::Role => &mut self.role,
            TextField::ProjectNeeds => &mut self.project_needs,
            TextField::Phone => &mut self.phone,
        }
    }

    pub fn opt_in(&self, which: OptIn) -> bool {
        match which {
            OptIn::Email => self.email_opt_in,
            OptIn::Sms => self.sms_opt_in,
        }
    }

    /// First required field that is still empty, in step order
    pub fn missing_field(&self) -> Option<TextField> {
        WizardStep::ALL
            .iter()
            .flat_map(|step| step.required_fields())
            .copied()
            .find(|field| self.text(*field).is_empty())
    }
}

/// A single page of the wizard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    /// First name and email
    Identity,
    /// Company and role
    Organization,
    /// Free-text project description
    Needs,
    /// Optional phone number and opt-ins
    Preferences,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Identity,
        WizardStep::Organization,
        WizardStep::Needs,
        WizardStep::Preferences,
    ];

    /// 1-based position
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Identity => 1,
            WizardStep::Organization => 2,
            WizardStep::Needs => 3,
            WizardStep::Preferences => 4,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::Identity => Some(WizardStep::Organization),
            WizardStep::Organization => Some(WizardStep::Needs),
            WizardStep::Needs => Some(WizardStep::Preferences),
            WizardStep::Preferences => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::Identity => None,
            WizardStep::Organization => Some(WizardStep::Identity),
            WizardStep::Needs => Some(WizardStep::Organization),
            WizardStep::Preferences => Some(WizardStep::Needs),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Identity => "Let's get started",
            WizardStep::Organization => "Tell us about your company",
            WizardStep::Needs => "What do you need help with?",
            WizardStep::Preferences => "Almost done",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            WizardStep::Identity => "We just need a few details",
            WizardStep::Organization => "Help us understand your organization",
            WizardStep::Needs => "Describe your project needs",
            WizardStep::Preferences => "Optional information",
        }
    }

    /// Fields that must be non-empty before leaving this step
    pub fn required_fields(&self) -> &'static [TextField] {
        match self {
            WizardStep::Identity => &[TextField::FirstName, TextField::Email],
            WizardStep::Organization => &[TextField::CompanyName, TextField::Role],
            WizardStep::Needs => &[TextField::ProjectNeeds],
            WizardStep::Preferences => &[],
        }
    }

    pub fn is_satisfied_by(&self, form: &LeadForm) -> bool {
        self.required_fields()
            .iter()
            .all(|field| !form.text(*field).is_empty())
    }
}

/// Where the wizard currently is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardPhase {
    Editing(WizardStep),
    Submitted,
}

/// Result of pressing the forward button
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Required fields missing, or already submitted; nothing changed
    Blocked,
    /// Moved to the given step
    Moved(WizardStep),
    /// Final step confirmed; carries the snapshot to hand off
    Submitted(LeadForm),
}

/// One instance of the lead-capture wizard
///
/// Dropping the value is how the wizard is closed; a fresh instance starts on
/// step 1 with an empty form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadWizard {
    form: LeadForm,
    phase: WizardPhase,
}

impl Default for LeadWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadWizard {
    pub fn new() -> Self {
        Self {
            form: LeadForm::default(),
            phase: WizardPhase::Editing(WizardStep::Identity),
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Current step, or `None` once submitted
    pub fn step(&self) -> Option<WizardStep> {
        match self.phase {
            WizardPhase::Editing(step) => Some(step),
            WizardPhase::Submitted => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == WizardPhase::Submitted
    }

    /// Returns false when the wizard is locked
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) -> bool {
        if self.is_submitted() {
            return false;
        }
        *self.form.text_mut(field) = value.into();
        true
    }

    /// Returns false when the wizard is locked
    pub fn set_opt_in(&mut self, which: OptIn, value: bool) -> bool {
        if self.is_submitted() {
            return false;
        }
        match which {
            OptIn::Email => self.form.email_opt_in = value,
            OptIn::Sms => self.form.sms_opt_in = value,
        }
        true
    }

    /// Whether the forward button is enabled
    pub fn can_advance(&self) -> bool {
        self.step()
            .is_some_and(|step| step.is_satisfied_by(&self.form))
    }

    pub fn advance(&mut self) -> Advance {
        let Some(step) = self.step() else {
            return Advance::Blocked;
        };
        if !step.is_satisfied_by(&self.form) {
            return Advance::Blocked;
        }
        match step.next() {
            Some(next) => {
                self.phase = WizardPhase::Editing(next);
                Advance::Moved(next)
            }
            None => {
                self.phase = WizardPhase::Submitted;
                Advance::Submitted(self.form.clone())
            }
        }
    }

    /// Step back one page, keeping every entered value
    pub fn back(&mut self) -> bool {
        match self.step().and_then(|step| step.previous()) {
            Some(previous) => {
                self.phase = WizardPhase::Editing(previous);
                true
            }
            None => false,
        }
    }

    /// Rounded completion percentage for the progress bar
    pub fn progress_percent(&self) -> u8 {
        match self.step() {
            Some(step) => {
                let ratio = f64::from(step.number()) / f64::from(TOTAL_STEPS);
                (ratio * 100.0).round() as u8
            }
            None => 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard_on_step(step: WizardStep) -> LeadWizard {
        let mut wizard = LeadWizard::new();
        wizard.set_text(TextField::FirstName, "Jane");
        wizard.set_text(TextField::Email, "jane@company.com");
        wizard.set_text(TextField::CompanyName, "Acme");
        wizard.set_text(TextField::Role, "CTO");
        wizard.set_text(TextField::ProjectNeeds, "Automate intake");
        while wizard.step() != Some(step) {
            assert!(matches!(wizard.advance(), Advance::Moved(_)));
        }
        wizard
    }

    #[test]
    fn test_new_wizard_is_empty_on_step_one() {
        let wizard = LeadWizard::new();
        assert_eq!(wizard.step(), Some(WizardStep::Identity));
        assert_eq!(wizard.form(), &LeadForm::default());
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_step_one_requires_name_and_email() {
        let mut wizard = LeadWizard::new();
        wizard.set_text(TextField::FirstName, "Jane");
        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Advance::Blocked);
        assert_eq!(wizard.step(), Some(WizardStep::Identity));

        wizard.set_text(TextField::Email, "jane@company.com");
        assert!(wizard.can_advance());
        assert_eq!(wizard.advance(), Advance::Moved(WizardStep::Organization));
    }

    #[test]
    fn test_email_format_is_not_checked() {
        let mut wizard = LeadWizard::new();
        wizard.set_text(TextField::FirstName, "Jane");
        wizard.set_text(TextField::Email, "not an email");
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_step_two_requires_company_and_role() {
        let mut wizard = LeadWizard::new();
        wizard.set_text(TextField::FirstName, "Jane");
        wizard.set_text(TextField::Email, "jane@company.com");
        wizard.advance();

        wizard.set_text(TextField::Role, "CTO");
        assert!(!wizard.can_advance());
        wizard.set_text(TextField::CompanyName, "Acme");
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_step_three_requires_project_needs() {
        let mut wizard = wizard_on_step(WizardStep::Needs);
        wizard.set_text(TextField::ProjectNeeds, "");
        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Advance::Blocked);
    }

    #[test]
    fn test_step_four_always_advances() {
        let mut wizard = wizard_on_step(WizardStep::Preferences);
        assert!(wizard.can_advance());
        assert!(matches!(wizard.advance(), Advance::Submitted(_)));
    }

    #[test]
    fn test_back_from_step_one_is_noop() {
        let mut wizard = LeadWizard::new();
        assert!(!wizard.back());
        assert_eq!(wizard.step(), Some(WizardStep::Identity));
    }

    #[test]
    fn test_submission_carries_full_snapshot() {
        let mut wizard = wizard_on_step(WizardStep::Preferences);
        wizard.set_text(TextField::Phone, "+1 (555) 555-5555");
        wizard.set_opt_in(OptIn::Sms, true);

        let Advance::Submitted(lead) = wizard.advance() else {
            panic!("expected submission");
        };
        assert_eq!(lead.first_name, "Jane");
        assert_eq!(lead.project_needs, "Automate intake");
        assert_eq!(lead.phone, "+1 (555) 555-5555");
        assert!(lead.sms_opt_in);
        assert!(!lead.email_opt_in);
    }

    #[test]
    fn test_submitted_wizard_is_locked() {
        let mut wizard = wizard_on_step(WizardStep::Preferences);
        wizard.advance();

        assert!(wizard.is_submitted());
        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Advance::Blocked);
        assert!(!wizard.back());
        assert!(!wizard.set_text(TextField::FirstName, "John"));
        assert!(!wizard.set_opt_in(OptIn::Email, true));
        assert_eq!(wizard.form().first_name, "Jane");
        assert!(!wizard.form().email_opt_in);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(LeadWizard::new().progress_percent(), 25);
        assert_eq!(wizard_on_step(WizardStep::Organization).progress_percent(), 50);
        assert_eq!(wizard_on_step(WizardStep::Needs).progress_percent(), 75);
        assert_eq!(wizard_on_step(WizardStep::Preferences).progress_percent(), 100);
    }

    #[test]
    fn test_missing_field_in_step_order() {
        let mut form = LeadForm::default();
        assert_eq!(form.missing_field(), Some(TextField::FirstName));
        form.first_name = "Jane".into();
        form.email = "jane@company.com".into();
        form.role = "CTO".into();
        assert_eq!(form.missing_field(), Some(TextField::CompanyName));
        form.company_name = "Acme".into();
        form.project_needs = "Automate intake".into();
        assert_eq!(form.missing_field(), None);
    }

    #[test]
    fn test_lead_form_serializes_camel_case() {
        let form = LeadForm {
            first_name: "Jane".into(),
            email_opt_in: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["emailOptIn"], true);
        assert_eq!(json["smsOptIn"], false);
    }

    #[test]
    fn test_step_copy() {
        assert_eq!(WizardStep::Identity.title(), "Let's get started");
        assert_eq!(WizardStep::Preferences.subtitle(), "Optional information");
        assert!(WizardStep::Preferences.is_last());
        assert!(!WizardStep::Needs.is_last());
    }
}
