//! In-memory form surface for tests, demos, and headless hosts.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::surface::{FieldValues, FormSurface};

/// Internal state for a memory form.
#[derive(Debug)]
struct MemoryFormInner {
    /// Current raw input values.
    values: FieldValues,
    /// Visible error annotations, keyed by field.
    errors: HashMap<String, String>,
    /// Whether the submit trigger accepts activation.
    submit_enabled: bool,
    /// Current submit trigger label.
    submit_label: String,
}

impl Default for MemoryFormInner {
    fn default() -> Self {
        Self {
            values: FieldValues::new(),
            errors: HashMap::new(),
            submit_enabled: true,
            submit_label: String::new(),
        }
    }
}

/// An in-memory implementation of [`FormSurface`].
///
/// Holds values, error annotations, and the submit trigger state behind a
/// lock, with read accessors for hosts and tests. Cloning shares the same
/// underlying form.
///
/// # Example
///
/// ```
/// use formwork::memory::MemoryForm;
///
/// let form = MemoryForm::new();
/// form.set_value("email", "a@b.com");
/// assert_eq!(form.value("email"), "a@b.com");
/// assert!(form.submit_enabled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    inner: Arc<RwLock<MemoryFormInner>>,
}

impl MemoryForm {
    /// Creates a new empty form with the trigger enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form with a starting trigger label.
    pub fn with_submit_label(label: impl Into<String>) -> Self {
        let form = Self::default();
        if let Ok(mut guard) = form.inner.write() {
            guard.submit_label = label.into();
        }
        form
    }

    /// Sets one field's raw value (simulates typing).
    ///
    /// This only stores the value. Hosts deliver the matching change event
    /// to the controller themselves.
    pub fn set_value(&self, field: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.values.insert(field.into(), value.into());
        }
    }

    /// Gets one field's raw value, or `""` when unset.
    pub fn value(&self, field: &str) -> String {
        self.inner
            .read()
            .map(|guard| guard.values.get(field).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Gets a copy of all current values.
    pub fn values(&self) -> FieldValues {
        self.inner
            .read()
            .map(|guard| guard.values.clone())
            .unwrap_or_default()
    }

    /// Gets the error annotation for one field.
    pub fn error(&self, field: &str) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.errors.get(field).cloned())
            .unwrap_or(None)
    }

    /// Checks whether a field currently shows an error.
    pub fn has_error(&self, field: &str) -> bool {
        self.error(field).is_some()
    }

    /// Gets a copy of all visible error annotations.
    pub fn errors(&self) -> HashMap<String, String> {
        self.inner
            .read()
            .map(|guard| guard.errors.clone())
            .unwrap_or_default()
    }

    /// Counts the fields currently showing an error.
    pub fn error_count(&self) -> usize {
        self.inner.read().map(|guard| guard.errors.len()).unwrap_or(0)
    }

    /// Checks whether the submit trigger is enabled.
    pub fn submit_enabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.submit_enabled)
            .unwrap_or(true)
    }

    /// Gets the submit trigger label.
    pub fn submit_label(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.submit_label.clone())
            .unwrap_or_default()
    }
}

impl FormSurface for MemoryForm {
    fn field_values(&self) -> FieldValues {
        self.values()
    }

    fn set_field_error(&self, field: &str, message: Option<&str>) {
        if let Ok(mut guard) = self.inner.write() {
            match message {
                Some(message) => {
                    guard.errors.insert(field.to_string(), message.to_string());
                }
                None => {
                    guard.errors.remove(field);
                }
            }
        }
    }

    fn set_submit_state(&self, enabled: bool, label: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.submit_enabled = enabled;
            guard.submit_label = label.to_string();
        }
    }

    fn clear_field_values(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.values.clear();
        }
    }
}
