//! Form schemas and the validation pass over a value snapshot.

use std::collections::HashSet;

use crate::error::SpecError;
use crate::report::{FieldResult, ValidationReport};
use crate::rules::Rule;
use crate::surface::FieldValues;

/// One named field and the ordered rules applied to its raw value.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    rules: Vec<Rule>,
}

impl FieldSpec {
    /// Create a field with no rules (always valid).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run the field's rules against a raw value.
    ///
    /// The first failing rule's message is reported; later rules are not
    /// consulted. A field with no rules is always valid.
    pub fn check(&self, value: &str) -> FieldResult {
        for rule in &self.rules {
            if !rule.check(value) {
                return FieldResult::Invalid(rule.message().to_string());
            }
        }
        FieldResult::Valid
    }
}

/// Ordered validation schema for one logical form.
///
/// Built once from static configuration and immutable afterwards; the
/// feedback controller shares it behind an `Arc`.
///
/// # Example
///
/// ```
/// use formwork::form::FormSpec;
/// use formwork::surface::FieldValues;
///
/// let spec = FormSpec::builder("lead")
///     .field("name")
///     .min_length(2, "Please enter your full name")
///     .field("email")
///     .email("Please enter a valid email address")
///     .build()
///     .unwrap();
///
/// let mut values = FieldValues::new();
/// values.insert("name".into(), "Al".into());
/// values.insert("email".into(), "a@b.com".into());
/// assert!(spec.validate(&values).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct FormSpec {
    form_id: String,
    fields: Vec<FieldSpec>,
}

impl FormSpec {
    /// Start building a schema for the given form id.
    pub fn builder(form_id: impl Into<String>) -> FormSpecBuilder {
        FormSpecBuilder {
            form_id: form_id.into(),
            fields: Vec::new(),
        }
    }

    /// Assemble a schema from prebuilt fields.
    ///
    /// Fails if two fields share a name.
    pub fn from_fields(
        form_id: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, SpecError> {
        let form_id = form_id.into();
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(SpecError::DuplicateField {
                    form: form_id.clone(),
                    field: field.name().to_string(),
                });
            }
        }
        Ok(Self { form_id, fields })
    }

    /// Get the form id.
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Get the fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Iterate over field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldSpec::name)
    }

    /// Validate a snapshot of raw values against every field.
    ///
    /// Pure and deterministic: the same schema and snapshot always produce
    /// an equal report. Fields missing from the snapshot validate as the
    /// empty string; snapshot keys with no matching field are ignored.
    /// Report entries follow field declaration order.
    pub fn validate(&self, values: &FieldValues) -> ValidationReport {
        let entries = self
            .fields
            .iter()
            .map(|field| {
                let raw = values.get(field.name()).map(String::as_str).unwrap_or("");
                (field.name().to_string(), field.check(raw))
            })
            .collect();
        ValidationReport::new(self.form_id.clone(), entries)
    }

    /// Validate a single field's raw value (the blur path).
    ///
    /// Returns `None` for unknown field names.
    pub fn validate_field(&self, name: &str, value: &str) -> Option<FieldResult> {
        self.field(name).map(|field| field.check(value))
    }
}

/// Builder for assembling a [`FormSpec`] field by field.
pub struct FormSpecBuilder {
    form_id: String,
    fields: Vec<FieldSpec>,
}

impl FormSpecBuilder {
    /// Add a field to the schema.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            builder: self,
            field: FieldSpec::new(name),
        }
    }

    /// Finish the schema.
    ///
    /// Fails if two fields share a name.
    pub fn build(self) -> Result<FormSpec, SpecError> {
        FormSpec::from_fields(self.form_id, self.fields)
    }
}

/// Builder for adding rules to a single field.
pub struct FieldBuilder {
    builder: FormSpecBuilder,
    field: FieldSpec,
}

impl FieldBuilder {
    /// Add a custom predicate rule.
    pub fn rule<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.add_rule(Rule::new(predicate, message))
    }

    /// Add a prebuilt rule.
    pub fn add_rule(mut self, rule: Rule) -> Self {
        self.field = self.field.rule(rule);
        self
    }

    /// Require the field to be non-empty after trimming.
    pub fn required(self, message: impl Into<String>) -> Self {
        self.add_rule(Rule::required(message))
    }

    /// Require minimum length (in characters) after trimming.
    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.add_rule(Rule::min_length(min, message))
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.add_rule(Rule::max_length(max, message))
    }

    /// Require an email-shaped value.
    pub fn email(self, message: impl Into<String>) -> Self {
        self.add_rule(Rule::email(message))
    }

    /// Require at least ten digits among the characters.
    pub fn phone(self, message: impl Into<String>) -> Self {
        self.add_rule(Rule::phone(message))
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        self.finalize().field(name)
    }

    /// Finalize and finish the schema.
    pub fn build(self) -> Result<FormSpec, SpecError> {
        self.finalize().build()
    }

    /// Finalize this field and return the schema builder.
    fn finalize(mut self) -> FormSpecBuilder {
        self.builder.fields.push(self.field);
        self.builder
    }
}
