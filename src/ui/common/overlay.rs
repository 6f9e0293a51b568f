use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::ui::common::scroll::set_body_overflow;

/// Mounted overlays in mount order
///
/// A card overlay and the lead form are toggled independently and can be open
/// at the same time. Only the topmost one reacts to Escape, and page scrolling
/// stays suspended until the last one is gone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OverlayStack {
    next_id: u64,
    open: Vec<u64>,
}

impl OverlayStack {
    /// Register a newly mounted overlay.
    /// Returns its id and whether it is the only open overlay.
    pub fn push(&mut self) -> (u64, bool) {
        let id = self.next_id;
        self.next_id += 1;
        self.open.push(id);
        (id, self.open.len() == 1)
    }

    /// Unregister an overlay, wherever it sits in the stack.
    /// Returns true when this closed the last open overlay.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.open.len();
        self.open.retain(|open| *open != id);
        before != self.open.len() && self.open.is_empty()
    }

    pub fn is_top(&self, id: u64) -> bool {
        self.open.last() == Some(&id)
    }
}

#[cfg(not(feature = "ssr"))]
thread_local! {
    static OPEN_OVERLAYS: std::cell::RefCell<OverlayStack> = std::cell::RefCell::new(OverlayStack::default());
}

/// Full-screen overlay with a dimmed backdrop
///
/// Mount it only while it should be visible: page scrolling is suspended for
/// as long as the overlay exists, and restored when it unmounts.
#[component]
pub fn Overlay(
    /// Callback to close the overlay
    on_close: Callback<()>,
    /// Overlay content
    children: Children,
    /// Classes for the panel (width, padding, layout)
    #[prop(default = "max-w-2xl")]
    panel_class: &'static str,
    /// Accessible name of the dialog
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    // Scroll lock and Escape key close (topmost overlay only)
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let (id, first) = OPEN_OVERLAYS.with(|stack| stack.borrow_mut().push());
        if first {
            set_body_overflow("hidden");
        }

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && OPEN_OVERLAYS.with(|stack| stack.borrow().is_top(id)) {
                on_close.run(());
            }
        });

        on_cleanup(move || {
            drop(handle_keydown);
            if OPEN_OVERLAYS.with(|stack| stack.borrow_mut().remove(id)) {
                set_body_overflow("auto");
            }
        });
    }

    view! {
        <div
            class="fixed inset-0 z-[100] flex items-center justify-center px-4 md:px-6"
            role="dialog"
            aria-modal="true"
            aria-label=label
        >
            <div
                class="absolute inset-0 bg-black/90 backdrop-blur-2xl animate-fade-in"
                on:click=move |_| on_close.run(())
            />
            <div class=format!(
                "relative w-full bg-[#080808] border border-white/10 rounded-[32px] overflow-hidden shadow-[0_0_100px_rgba(0,0,0,0.8)] animate-fade-in-up {}",
                panel_class,
            )>
                <button
                    type="button"
                    class="absolute top-6 right-6 z-50 p-2.5 rounded-full bg-black/50 backdrop-blur-md border border-white/10 hover:bg-white/10 text-white transition-colors"
                    on:click=move |_| on_close.run(())
                    title="Close"
                    aria-label="Close"
                >
                    <Icon name=icons::X class="w-5 h-5"/>
                </button>

                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_overlay() {
        let mut stack = OverlayStack::default();
        let (id, first) = stack.push();
        assert!(first);
        assert!(stack.is_top(id));
        assert!(stack.remove(id));
        assert!(!stack.is_top(id));
    }

    #[test]
    fn test_only_topmost_overlay_is_top() {
        let mut stack = OverlayStack::default();
        let (card, _) = stack.push();
        let (form, first) = stack.push();

        assert!(!first);
        assert!(stack.is_top(form));
        assert!(!stack.is_top(card));

        // Closing the form hands Escape back to the card overlay
        assert!(!stack.remove(form));
        assert!(stack.is_top(card));
        assert!(stack.remove(card));
    }

    #[test]
    fn test_closing_lower_overlay_keeps_top_and_lock() {
        let mut stack = OverlayStack::default();
        let (card, _) = stack.push();
        let (form, _) = stack.push();

        assert!(!stack.remove(card));
        assert!(stack.is_top(form));
        assert!(stack.remove(form));
    }

    #[test]
    fn test_removing_unknown_overlay_is_ignored() {
        let mut stack = OverlayStack::default();
        assert!(!stack.remove(7));

        let (id, _) = stack.push();
        assert!(!stack.remove(id + 1));
        assert!(stack.is_top(id));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut stack = OverlayStack::default();
        let (first, _) = stack.push();
        stack.remove(first);
        let (second, reopened_first) = stack.push();
        assert_ne!(first, second);
        assert!(reopened_first);
    }
}
