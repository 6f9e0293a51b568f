#[cfg(test)]
mod tests {
    use crate::core::{
        Advance, FeatureOverlay, Industry, LeadWizard, OptIn, ShowcaseState, TextField,
        WizardStep, features_for,
    };

    fn fill_required(wizard: &mut LeadWizard) {
        wizard.set_text(TextField::FirstName, "Jane");
        wizard.set_text(TextField::Email, "jane@company.com");
        wizard.set_text(TextField::CompanyName, "Acme Dental");
        wizard.set_text(TextField::Role, "Operations Lead");
        wizard.set_text(TextField::ProjectNeeds, "Cut no-shows in half");
    }

    #[test]
    fn test_back_navigation_preserves_values() {
        let mut wizard = LeadWizard::new();
        fill_required(&mut wizard);

        assert_eq!(wizard.advance(), Advance::Moved(WizardStep::Organization));
        assert_eq!(wizard.advance(), Advance::Moved(WizardStep::Needs));

        assert!(wizard.back());
        assert!(wizard.back());
        assert_eq!(wizard.step(), Some(WizardStep::Identity));
        assert_eq!(wizard.form().first_name, "Jane");
        assert_eq!(wizard.form().email, "jane@company.com");
        assert_eq!(wizard.form().project_needs, "Cut no-shows in half");
    }

    #[test]
    fn test_cannot_skip_ahead_after_clearing_a_field() {
        let mut wizard = LeadWizard::new();
        fill_required(&mut wizard);
        wizard.advance();
        wizard.back();

        wizard.set_text(TextField::Email, "");

        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Advance::Blocked);
        assert_eq!(wizard.step(), Some(WizardStep::Identity));
    }

    #[test]
    fn test_full_walkthrough_submits_once() {
        let mut wizard = LeadWizard::new();
        fill_required(&mut wizard);

        let mut submissions = Vec::new();
        for _ in 0..10 {
            if let Advance::Submitted(lead) = wizard.advance() {
                submissions.push(lead);
            }
        }

        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].company_name, "Acme Dental");
        assert!(wizard.is_submitted());
    }

    #[test]
    fn test_reopening_starts_fresh() {
        // The root container drops the wizard on close and builds a new one
        // on the next "Get started", whichever section triggered it.
        let mut modal: Option<LeadWizard> = None;

        // Opened from the hero
        let wizard = modal.get_or_insert_with(LeadWizard::new);
        fill_required(wizard);
        wizard.set_opt_in(OptIn::Email, true);
        wizard.advance();

        // Closed
        modal = None;
        assert!(modal.is_none());

        // Opened from a case study
        let wizard = modal.get_or_insert_with(LeadWizard::new);
        assert_eq!(wizard.step(), Some(WizardStep::Identity));
        assert!(wizard.form().first_name.is_empty());
        assert!(!wizard.form().email_opt_in);
    }

    #[test]
    fn test_reopening_after_submit_unlocks() {
        let mut wizard = LeadWizard::new();
        fill_required(&mut wizard);
        while !wizard.is_submitted() {
            wizard.advance();
        }

        wizard = LeadWizard::new();

        assert!(wizard.set_text(TextField::FirstName, "John"));
        assert_eq!(wizard.step(), Some(WizardStep::Identity));
    }

    #[test]
    fn test_showcase_and_wizard_are_independent() {
        let mut showcase = ShowcaseState::new();
        let card = &features_for(Industry::Professional)[1];
        showcase.select(Industry::Professional);
        showcase.open(card);

        let mut wizard = LeadWizard::new();
        fill_required(&mut wizard);
        wizard.advance();

        assert_eq!(showcase.overlay, Some(FeatureOverlay::Demo(card)));
        assert_eq!(wizard.step(), Some(WizardStep::Organization));
    }

    #[test]
    fn test_tab_switch_keeps_open_overlay() {
        let mut showcase = ShowcaseState::new();
        let card = &showcase.cards()[0];
        showcase.open(card);

        showcase.select(Industry::AndMore);

        assert_eq!(showcase.overlay, Some(FeatureOverlay::Demo(card)));
        assert_eq!(showcase.cards().len(), 1);
    }
}
