//! The adapter boundary between the engine and a concrete UI.

use std::collections::HashMap;

/// Snapshot of raw field values, keyed by field name.
pub type FieldValues = HashMap<String, String>;

/// Handle to one rendered form.
///
/// The engine never touches a UI directly; a controller drives exactly one
/// form through this trait, so no call takes a form id. Implementations
/// must tolerate repeated application of the same state (every call is
/// idempotent from the controller's point of view).
pub trait FormSurface: Send + Sync {
    /// Read the current raw input values.
    fn field_values(&self) -> FieldValues;

    /// Apply or clear the visual error annotation for one field.
    ///
    /// Called once per field per validation pass.
    fn set_field_error(&self, field: &str, message: Option<&str>);

    /// Enable or disable the submit trigger and set its label.
    fn set_submit_state(&self, enabled: bool, label: &str);

    /// Clear every input value (after a successful submission).
    fn clear_field_values(&self);
}
