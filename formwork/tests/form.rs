use formwork::error::SpecError;
use formwork::form::{FieldSpec, FormSpec};
use formwork::report::FieldResult;
use formwork::rules::Rule;
use formwork::surface::FieldValues;

fn values(pairs: &[(&str, &str)]) -> FieldValues {
    pairs
        .iter()
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .collect()
}

fn lead_spec() -> FormSpec {
    FormSpec::builder("lead")
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
        .unwrap()
}

// =============================================================================
// Schema Building
// =============================================================================

#[test]
fn test_builder_keeps_declaration_order() {
    let spec = lead_spec();
    let names: Vec<&str> = spec.field_names().collect();
    assert_eq!(names, ["name", "phone", "email", "brief"]);
    assert_eq!(spec.form_id(), "lead");
}

#[test]
fn test_builder_rejects_duplicate_field() {
    let err = FormSpec::builder("signup")
        .field("email")
        .email("Bad email")
        .field("email")
        .required("Required")
        .build()
        .unwrap_err();
    match err {
        SpecError::DuplicateField { form, field } => {
            assert_eq!(form, "signup");
            assert_eq!(field, "email");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_from_fields_rejects_duplicates() {
    let fields = vec![FieldSpec::new("name"), FieldSpec::new("name")];
    assert!(FormSpec::from_fields("dup", fields).is_err());
}

#[test]
fn test_field_lookup() {
    let spec = lead_spec();
    assert!(spec.field("email").is_some());
    assert!(spec.field("company").is_none());
    assert_eq!(spec.fields().len(), 4);
}

#[test]
fn test_field_without_rules_is_always_valid() {
    let field = FieldSpec::new("note");
    assert!(field.check("").is_valid());
    assert!(field.check("anything at all").is_valid());
}

#[test]
fn test_first_failing_rule_wins() {
    let field = FieldSpec::new("name")
        .rule(Rule::required("Required"))
        .rule(Rule::min_length(5, "Too short"));
    assert_eq!(field.check(""), FieldResult::Invalid("Required".into()));
    assert_eq!(field.check("abc"), FieldResult::Invalid("Too short".into()));
    assert_eq!(field.check("abcde"), FieldResult::Valid);
}

// =============================================================================
// Validation Pass
// =============================================================================

#[test]
fn test_validate_all_valid() {
    let report = lead_spec().validate(&values(&[
        ("name", "Al"),
        ("phone", "555-000-1111"),
        ("email", "a@b.com"),
        ("brief", "This is a sufficiently long brief."),
    ]));
    assert!(report.is_valid());
    assert!(!report.is_invalid());
    assert!(report.errors().is_empty());
    assert_eq!(report.get("name"), Some(&FieldResult::Valid));
}

#[test]
fn test_validate_reports_each_failure_in_order() {
    let report = lead_spec().validate(&values(&[
        ("name", "A"),
        ("phone", "123"),
        ("email", "not-an-email"),
        ("brief", "short"),
    ]));
    assert!(!report.is_valid());

    let errors = report.errors();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors[0].field, "name");
    assert_eq!(errors[0].message, "Please enter your full name");
    assert_eq!(errors[1].field, "phone");
    assert_eq!(errors[1].message, "Please enter a valid phone number");
    assert_eq!(errors[2].field, "email");
    assert_eq!(errors[2].message, "Please enter a valid email address");
    assert_eq!(errors[3].field, "brief");
    assert_eq!(
        errors[3].message,
        "Please provide more details about your business (at least 20 characters)"
    );
}

#[test]
fn test_validate_is_deterministic() {
    let spec = lead_spec();
    let snapshot = values(&[("name", "A"), ("email", "a@b.com")]);
    assert_eq!(spec.validate(&snapshot), spec.validate(&snapshot));
}

#[test]
fn test_missing_fields_validate_as_empty() {
    let spec = lead_spec();
    let report = spec.validate(&values(&[("name", "Al")]));
    assert_eq!(report.get("name"), Some(&FieldResult::Valid));
    assert!(!report.get("phone").unwrap().is_valid());
    assert!(!report.get("email").unwrap().is_valid());
    assert!(!report.get("brief").unwrap().is_valid());
}

#[test]
fn test_unknown_snapshot_keys_are_ignored() {
    let spec = lead_spec();
    let report = spec.validate(&values(&[
        ("name", "Al"),
        ("company", "Extraneous Ltd"),
    ]));
    assert_eq!(report.len(), 4);
    assert!(report.get("company").is_none());
}

#[test]
fn test_validate_field_runs_one_rule_set() {
    let spec = lead_spec();
    assert_eq!(
        spec.validate_field("email", "a@b.com"),
        Some(FieldResult::Valid)
    );
    assert_eq!(
        spec.validate_field("email", "nope"),
        Some(FieldResult::Invalid(
            "Please enter a valid email address".into()
        ))
    );
    assert_eq!(spec.validate_field("company", "anything"), None);
}

#[test]
fn test_empty_schema_validates_trivially() {
    let spec = FormSpec::builder("empty").build().unwrap();
    let report = spec.validate(&FieldValues::new());
    assert!(report.is_valid());
    assert!(report.is_empty());
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_report_iteration_order_matches_schema() {
    let report = lead_spec().validate(&FieldValues::new());
    let order: Vec<&str> = report.iter().map(|(field, _)| field).collect();
    assert_eq!(order, ["name", "phone", "email", "brief"]);
    assert_eq!(report.form_id(), "lead");
}

#[test]
fn test_report_first_error_accessors() {
    let report = lead_spec().validate(&values(&[
        ("name", "Al"),
        ("phone", "bad"),
        ("email", "also bad"),
    ]));
    let first = report.first_error().unwrap();
    assert_eq!(first.field, "phone");
    assert_eq!(first.message, "Please enter a valid phone number");
    assert_eq!(report.first_invalid_field(), Some("phone"));
    assert_eq!(first.to_string(), "phone: Please enter a valid phone number");
}

#[test]
fn test_field_result_message_accessor() {
    assert_eq!(FieldResult::Valid.message(), None);
    assert_eq!(
        FieldResult::Invalid("oops".into()).message(),
        Some("oops")
    );
}
