//! Submission feedback: applying validation reports to a surface and
//! running the transient success window.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::event::FormEvent;
use crate::form::FormSpec;
use crate::report::ValidationReport;
use crate::schedule::{Scheduler, TimerHandle};
use crate::surface::FormSurface;

/// Default length of the transient success window.
pub const DEFAULT_SUCCESS_DELAY: Duration = Duration::from_secs(4);

/// Validation lifecycle of a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    /// No check has run for this field yet.
    #[default]
    Untouched,
    /// The last check passed.
    Valid,
    /// The last check failed; an error annotation is showing.
    Invalid,
}

/// Submission lifecycle of a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Accepting input and submissions.
    #[default]
    Idle,
    /// A valid submission was accepted; the success window is open.
    Succeeded,
}

/// Timing and labels for the submission feedback flow.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use formwork::controller::FormConfig;
///
/// let config = FormConfig::default()
///     .with_success_delay(Duration::from_secs(3))
///     .with_submit_label("Send Message");
/// ```
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// How long the success window stays open.
    ///
    /// Default: 4 seconds
    pub success_delay: Duration,

    /// Trigger label while the form accepts submissions.
    pub submit_label: String,

    /// Trigger label during the success window.
    pub success_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            success_delay: DEFAULT_SUCCESS_DELAY,
            submit_label: "Submit".to_string(),
            success_label: "Sent ✓".to_string(),
        }
    }
}

impl FormConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the success-window duration.
    pub fn with_success_delay(mut self, delay: Duration) -> Self {
        self.success_delay = delay;
        self
    }

    /// Sets the idle trigger label.
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Sets the success-window trigger label.
    pub fn with_success_label(mut self, label: impl Into<String>) -> Self {
        self.success_label = label.into();
        self
    }
}

/// Internal state for a form controller.
#[derive(Debug, Default)]
struct ControllerInner {
    /// Per-field lifecycle states (absent = Untouched).
    fields: HashMap<String, FieldState>,
    /// Current submission state.
    submission: SubmissionState,
    /// Handle to the open success-window timer, if any.
    window: Option<TimerHandle>,
}

/// Drives one form: validates on demand, annotates the surface, and runs
/// the transient success window.
///
/// The controller owns the form's error and trigger state exclusively;
/// hosts deliver events and render whatever the surface shows. Cloning
/// shares the same underlying controller (the window timer holds one such
/// clone).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use formwork::controller::{FormConfig, FormController};
/// use formwork::form::FormSpec;
/// use formwork::memory::MemoryForm;
/// use formwork::schedule::ManualScheduler;
///
/// let spec = FormSpec::builder("contact")
///     .field("email")
///     .email("Please enter a valid email address")
///     .build()
///     .unwrap();
/// let form = MemoryForm::new();
/// let scheduler = Arc::new(ManualScheduler::new());
/// let controller = FormController::new(
///     spec,
///     FormConfig::default(),
///     Arc::new(form.clone()),
///     scheduler,
/// );
///
/// form.set_value("email", "not-an-email");
/// controller.submit();
/// assert!(form.has_error("email"));
/// ```
pub struct FormController {
    /// Schema the controller validates against.
    spec: Arc<FormSpec>,
    /// Feedback timing and labels.
    config: Arc<FormConfig>,
    /// UI adapter for the target form.
    surface: Arc<dyn FormSurface>,
    /// Timer provider for the success window.
    scheduler: Arc<dyn Scheduler>,
    /// Internal state.
    inner: Arc<RwLock<ControllerInner>>,
}

impl FormController {
    /// Create a controller for one form.
    pub fn new(
        spec: FormSpec,
        config: FormConfig,
        surface: Arc<dyn FormSurface>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self {
            spec: Arc::new(spec),
            config: Arc::new(config),
            surface,
            scheduler,
            inner: Arc::new(RwLock::new(ControllerInner::default())),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the schema this controller validates against.
    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    /// Get the feedback configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Get the current submission state.
    pub fn submission(&self) -> SubmissionState {
        self.inner
            .read()
            .map(|guard| guard.submission)
            .unwrap_or_default()
    }

    /// Get the lifecycle state of one field.
    pub fn field_state(&self, field: &str) -> FieldState {
        self.inner
            .read()
            .map(|guard| guard.fields.get(field).copied().unwrap_or_default())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Event handling
    // -------------------------------------------------------------------------

    /// Dispatch one host event.
    pub fn handle_event(&self, event: FormEvent) {
        match event {
            FormEvent::Submit => self.submit(),
            FormEvent::Blur { field } => self.blur(&field),
            FormEvent::Change { field } => self.change(&field),
        }
    }

    /// Validate every field and, when all pass, open the success window.
    ///
    /// Ignored while the window is open: the trigger stays disabled for
    /// the whole window, so a second submission can never start a second
    /// timer.
    pub fn submit(&self) {
        if self.submission() == SubmissionState::Succeeded {
            log::debug!(
                "[form] {}: submit ignored, success window open",
                self.spec.form_id()
            );
            return;
        }

        let values = self.surface.field_values();
        let report = self.spec.validate(&values);
        self.apply_report(&report);

        if report.is_valid() {
            self.open_window();
        } else {
            log::debug!(
                "[form] {}: submit blocked by {} field error(s)",
                self.spec.form_id(),
                report.errors().len()
            );
        }
    }

    /// Re-check one field after it loses focus.
    ///
    /// Empty values are skipped entirely: an untouched field shows no
    /// error until a submit attempt. Non-empty values (including
    /// whitespace-only ones) run this field's rules and update its
    /// annotation in both directions.
    pub fn blur(&self, field: &str) {
        let Some(field_spec) = self.spec.field(field) else {
            log::warn!(
                "[form] {}: blur on unknown field '{}'",
                self.spec.form_id(),
                field
            );
            return;
        };

        let values = self.surface.field_values();
        let value = values.get(field).map(String::as_str).unwrap_or("");
        if value.is_empty() {
            return;
        }

        let result = field_spec.check(value);
        let state = if result.is_valid() {
            FieldState::Valid
        } else {
            FieldState::Invalid
        };
        if let Ok(mut guard) = self.inner.write() {
            guard.fields.insert(field.to_string(), state);
        }
        self.surface.set_field_error(field, result.message());
    }

    /// Clear a field's error after an edit, without re-validating.
    ///
    /// The optimistic clear: the annotation goes away immediately and the
    /// authoritative check waits for the next blur or submit. Fields not
    /// currently in error are left alone.
    pub fn change(&self, field: &str) {
        if self.spec.field(field).is_none() {
            log::warn!(
                "[form] {}: change on unknown field '{}'",
                self.spec.form_id(),
                field
            );
            return;
        }

        let was_invalid = self
            .inner
            .write()
            .map(|mut guard| {
                if guard.fields.get(field) == Some(&FieldState::Invalid) {
                    guard.fields.insert(field.to_string(), FieldState::Untouched);
                    true
                } else {
                    false
                }
            })
            .unwrap_or(false);

        if was_invalid {
            self.surface.set_field_error(field, None);
            log::trace!(
                "[form] {}: cleared error on '{}' pending re-check",
                self.spec.form_id(),
                field
            );
        }
    }

    /// Apply a validation report to the surface.
    ///
    /// Every reported field gets its annotation set or cleared and its
    /// state moved to Valid or Invalid. Applying the same report twice
    /// leaves the surface unchanged the second time.
    pub fn apply_report(&self, report: &ValidationReport) {
        if let Ok(mut guard) = self.inner.write() {
            for (field, result) in report.iter() {
                let state = if result.is_valid() {
                    FieldState::Valid
                } else {
                    FieldState::Invalid
                };
                guard.fields.insert(field.to_string(), state);
            }
        }
        for (field, result) in report.iter() {
            self.surface.set_field_error(field, result.message());
        }
    }

    /// Return the form to its initial state.
    ///
    /// Cancels an open success window, clears every value and annotation,
    /// re-enables the trigger, and puts all fields back to Untouched.
    pub fn reset(&self) {
        let window = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            guard.submission = SubmissionState::Idle;
            guard.fields.clear();
            guard.window.take()
        };
        if let Some(handle) = window {
            handle.cancel();
        }

        for field in self.spec.field_names() {
            self.surface.set_field_error(field, None);
        }
        self.surface.clear_field_values();
        self.surface
            .set_submit_state(true, &self.config.submit_label);
        log::debug!("[form] {}: reset", self.spec.form_id());
    }

    // -------------------------------------------------------------------------
    // Success window
    // -------------------------------------------------------------------------

    /// Open the transient success window and schedule its close.
    fn open_window(&self) {
        {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            // A racing submit may have opened the window first
            if guard.submission == SubmissionState::Succeeded {
                return;
            }
            guard.submission = SubmissionState::Succeeded;
        }

        self.surface
            .set_submit_state(false, &self.config.success_label);

        let controller = self.clone();
        let handle = self.scheduler.schedule(
            self.config.success_delay,
            Box::new(move || controller.close_window()),
        );
        if let Ok(mut guard) = self.inner.write() {
            guard.window = Some(handle);
        }
        log::debug!(
            "[form] {}: success window open for {:?}",
            self.spec.form_id(),
            self.config.success_delay
        );
    }

    /// Close the success window: clear inputs and restore the trigger.
    fn close_window(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.submission = SubmissionState::Idle;
            guard.window = None;
            guard.fields.clear();
        }
        self.surface.clear_field_values();
        self.surface
            .set_submit_state(true, &self.config.submit_label);
        log::debug!(
            "[form] {}: success window closed, form reset",
            self.spec.form_id()
        );
    }
}

impl Clone for FormController {
    fn clone(&self) -> Self {
        Self {
            spec: Arc::clone(&self.spec),
            config: Arc::clone(&self.config),
            surface: Arc::clone(&self.surface),
            scheduler: Arc::clone(&self.scheduler),
            inner: Arc::clone(&self.inner),
        }
    }
}
