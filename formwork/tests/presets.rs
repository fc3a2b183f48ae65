use std::time::Duration;

use formwork::presets;
use formwork::surface::FieldValues;

fn values(pairs: &[(&str, &str)]) -> FieldValues {
    pairs
        .iter()
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .collect()
}

// =============================================================================
// Lead Request
// =============================================================================

#[test]
fn test_lead_shape() {
    let preset = presets::lead();
    assert_eq!(preset.spec.form_id(), "lead");
    let names: Vec<&str> = preset.spec.field_names().collect();
    assert_eq!(names, ["name", "phone", "email", "brief"]);
    assert_eq!(preset.config.success_delay, Duration::from_secs(4));
    assert_eq!(preset.config.submit_label, "Send Request");
    assert_eq!(preset.config.success_label, "Request Sent! ✓");
}

#[test]
fn test_lead_accepts_complete_request() {
    let report = presets::lead().spec.validate(&values(&[
        ("name", "Ada Lovelace"),
        ("phone", "(555) 867-5309"),
        ("email", "ada@example.com"),
        ("brief", "We need a new analytical engine built next quarter."),
    ]));
    assert!(report.is_valid());
}

#[test]
fn test_lead_brief_needs_twenty_characters() {
    let spec = presets::lead().spec;
    let result = spec.validate_field("brief", "Too short").unwrap();
    assert_eq!(
        result.message(),
        Some("Please provide more details about your business (at least 20 characters)")
    );
    assert!(
        spec.validate_field("brief", "Exactly twenty chars")
            .unwrap()
            .is_valid()
    );
}

// =============================================================================
// Contact
// =============================================================================

#[test]
fn test_contact_shape() {
    let preset = presets::contact();
    assert_eq!(preset.spec.form_id(), "contact");
    let names: Vec<&str> = preset.spec.field_names().collect();
    assert_eq!(names, ["name", "email", "message"]);
    assert_eq!(preset.config.success_delay, Duration::from_secs(3));
    assert_eq!(preset.config.submit_label, "Send Message");
    assert_eq!(preset.config.success_label, "Message Sent! ✓");
}

#[test]
fn test_contact_message_needs_ten_characters() {
    let spec = presets::contact().spec;
    let result = spec.validate_field("message", "Hi").unwrap();
    assert_eq!(
        result.message(),
        Some("Please tell us more about your project (at least 10 characters)")
    );
    assert!(
        spec.validate_field("message", "Ten chars!")
            .unwrap()
            .is_valid()
    );
}

// =============================================================================
// Newsletter
// =============================================================================

#[test]
fn test_newsletter_shape() {
    let preset = presets::newsletter();
    assert_eq!(preset.spec.form_id(), "newsletter");
    let names: Vec<&str> = preset.spec.field_names().collect();
    assert_eq!(names, ["email"]);
    assert_eq!(preset.config.success_delay, Duration::from_secs(3));
    assert_eq!(preset.config.submit_label, "Subscribe");
    assert_eq!(preset.config.success_label, "Subscribed ✓");
}

#[test]
fn test_newsletter_validates_email_only() {
    let spec = presets::newsletter().spec;
    let report = spec.validate(&values(&[("email", "nope")]));
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.first_error().unwrap().message,
        "Please enter a valid email address"
    );
    assert!(spec.validate(&values(&[("email", "a@b.com")])).is_valid());
}
