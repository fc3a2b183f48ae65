//! Stock form setups for common landing-page forms.
//!
//! Each preset pairs a schema with the feedback timing used for that form.
//! They are plain configuration: hosts that need different copy or timing
//! build their own [`FormSpec`] and [`FormConfig`] instead.

use std::time::Duration;

use crate::controller::FormConfig;
use crate::form::FormSpec;

/// A schema plus the feedback config that goes with it.
#[derive(Debug, Clone)]
pub struct FormPreset {
    /// The form's validation schema.
    pub spec: FormSpec,
    /// The form's feedback timing and labels.
    pub config: FormConfig,
}

/// Lead-request form: name, phone, email, and a project brief.
///
/// Uses the long 20-character brief threshold and a 4 second success
/// window.
pub fn lead() -> FormPreset {
    let spec = FormSpec::builder("lead")
        .field("name")
        .min_length(2, "Please enter your full name")
        .field("phone")
        .phone("Please enter a valid phone number")
        .field("email")
        .email("Please enter a valid email address")
        .field("brief")
        .min_length(
            20,
            "Please provide more details about your business (at least 20 characters)",
        )
        .build()
        .expect("Invalid lead preset");
    let config = FormConfig::new()
        .with_success_delay(Duration::from_secs(4))
        .with_submit_label("Send Request")
        .with_success_label("Request Sent! ✓");
    FormPreset { spec, config }
}

/// Contact form: name, email, and a short message.
///
/// Uses the 10-character message threshold and a 3 second success window.
pub fn contact() -> FormPreset {
    let spec = FormSpec::builder("contact")
        .field("name")
        .min_length(2, "Please enter your full name")
        .field("email")
        .email("Please enter a valid email address")
        .field("message")
        .min_length(
            10,
            "Please tell us more about your project (at least 10 characters)",
        )
        .build()
        .expect("Invalid contact preset");
    let config = FormConfig::new()
        .with_success_delay(Duration::from_secs(3))
        .with_submit_label("Send Message")
        .with_success_label("Message Sent! ✓");
    FormPreset { spec, config }
}

/// Newsletter signup: a single email field.
pub fn newsletter() -> FormPreset {
    let spec = FormSpec::builder("newsletter")
        .field("email")
        .email("Please enter a valid email address")
        .build()
        .expect("Invalid newsletter preset");
    let config = FormConfig::new()
        .with_success_delay(Duration::from_secs(3))
        .with_submit_label("Subscribe")
        .with_success_label("Subscribed ✓");
    FormPreset { spec, config }
}
