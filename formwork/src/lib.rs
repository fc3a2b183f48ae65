//! Form validation and submission feedback engine
//!
//! `formwork` checks field values against configured rules and drives the
//! feedback a form shows afterwards: per-field error annotations plus the
//! transient success window on the submit trigger. The engine is
//! UI-agnostic. Hosts implement [`FormSurface`] for their form, forward
//! user interactions as [`FormEvent`]s, and render whatever state the
//! surface holds.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use formwork::{FormController, ManualScheduler, MemoryForm, presets};
//!
//! let preset = presets::lead();
//! let form = MemoryForm::new();
//! let scheduler = Arc::new(ManualScheduler::new());
//! let controller = FormController::new(
//!     preset.spec,
//!     preset.config,
//!     Arc::new(form.clone()),
//!     scheduler,
//! );
//!
//! form.set_value("name", "A");
//! controller.submit();
//! assert_eq!(
//!     form.error("name").as_deref(),
//!     Some("Please enter your full name"),
//! );
//! ```

pub mod controller;
pub mod definition;
pub mod error;
pub mod event;
pub mod form;
pub mod memory;
pub mod presets;
pub mod report;
pub mod rules;
pub mod schedule;
pub mod surface;

pub use controller::{
    DEFAULT_SUCCESS_DELAY, FieldState, FormConfig, FormController, SubmissionState,
};
pub use error::SpecError;
pub use event::FormEvent;
pub use form::{FieldSpec, FormSpec};
pub use memory::MemoryForm;
pub use report::{FieldError, FieldResult, ValidationReport};
pub use rules::Rule;
pub use schedule::{ManualScheduler, Scheduler, TimerHandle, TokioScheduler};
pub use surface::{FieldValues, FormSurface};
