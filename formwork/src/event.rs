//! Events a host delivers to a form controller.

/// A user interaction on one form, forwarded by the host UI.
///
/// Hosts wire their native callbacks (DOM listeners, key handlers, test
/// drivers) to [`FormController::handle_event`], one event per
/// interaction; the controller decides what, if anything, to validate.
///
/// [`FormController::handle_event`]: crate::controller::FormController::handle_event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The submit trigger was activated.
    Submit,
    /// A field lost focus.
    Blur {
        /// Name of the field that lost focus.
        field: String,
    },
    /// A field's value changed (keystroke, paste, autofill).
    Change {
        /// Name of the field that changed.
        field: String,
    },
}
