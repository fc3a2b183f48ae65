//! Declarative form definitions loaded from static configuration.
//!
//! A [`FormDefinition`] is the serializable mirror of a schema plus its
//! feedback config: hosts can keep their forms in JSON and compile them at
//! startup with [`FormDefinition::into_parts`].

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::controller::FormConfig;
use crate::error::SpecError;
use crate::form::{FieldSpec, FormSpec};
use crate::rules::Rule;

/// Declarative description of one form and its feedback behavior.
///
/// # Example
///
/// ```
/// use formwork::definition::FormDefinition;
///
/// let json = r#"{
///     "form": "contact",
///     "fields": [
///         { "name": "email", "rules": [
///             { "kind": "email", "message": "Please enter a valid email address" }
///         ] }
///     ],
///     "success_delay_ms": 3000
/// }"#;
///
/// let definition: FormDefinition = serde_json::from_str(json).unwrap();
/// let (spec, config) = definition.into_parts().unwrap();
/// assert_eq!(spec.form_id(), "contact");
/// assert_eq!(config.success_delay.as_millis(), 3000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Form id the definition describes.
    pub form: String,

    /// Fields in display order.
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,

    /// Success-window length in milliseconds.
    #[serde(default)]
    pub success_delay_ms: Option<u64>,

    /// Idle trigger label.
    #[serde(default)]
    pub submit_label: Option<String>,

    /// Trigger label during the success window.
    #[serde(default)]
    pub success_label: Option<String>,
}

/// Declarative description of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name.
    pub name: String,

    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// Declarative description of one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleDefinition {
    /// Non-empty after trimming.
    Required {
        /// Message shown when the value is empty.
        message: String,
    },
    /// Minimum trimmed length in characters.
    MinLength {
        /// The threshold.
        min: usize,
        /// Message shown below the threshold.
        message: String,
    },
    /// Maximum length in characters.
    MaxLength {
        /// The threshold.
        max: usize,
        /// Message shown above the threshold.
        message: String,
    },
    /// Email-shaped value.
    Email {
        /// Message shown for non-email values.
        message: String,
    },
    /// At least ten digits among the characters.
    Phone {
        /// Message shown when digits are missing.
        message: String,
    },
    /// Custom regex pattern.
    Pattern {
        /// The pattern source.
        pattern: String,
        /// Message shown when the pattern does not match.
        message: String,
    },
}

impl RuleDefinition {
    /// Compile this definition into a runtime rule.
    pub fn to_rule(&self) -> Result<Rule, SpecError> {
        Ok(match self {
            Self::Required { message } => Rule::required(message.clone()),
            Self::MinLength { min, message } => Rule::min_length(*min, message.clone()),
            Self::MaxLength { max, message } => Rule::max_length(*max, message.clone()),
            Self::Email { message } => Rule::email(message.clone()),
            Self::Phone { message } => Rule::phone(message.clone()),
            Self::Pattern { pattern, message } => Rule::pattern(pattern, message.clone())?,
        })
    }
}

impl FieldDefinition {
    /// Compile this definition into a runtime field.
    pub fn to_field(&self) -> Result<FieldSpec, SpecError> {
        let mut field = FieldSpec::new(self.name.clone());
        for rule in &self.rules {
            field = field.rule(rule.to_rule()?);
        }
        Ok(field)
    }
}

impl FormDefinition {
    /// Compile this definition into a schema and its feedback config.
    ///
    /// Unset timing and labels fall back to the [`FormConfig`] defaults.
    pub fn into_parts(self) -> Result<(FormSpec, FormConfig), SpecError> {
        let fields = self
            .fields
            .iter()
            .map(FieldDefinition::to_field)
            .collect::<Result<Vec<_>, _>>()?;
        let spec = FormSpec::from_fields(self.form, fields)?;

        let mut config = FormConfig::default();
        if let Some(ms) = self.success_delay_ms {
            config = config.with_success_delay(Duration::from_millis(ms));
        }
        if let Some(label) = self.submit_label {
            config = config.with_submit_label(label);
        }
        if let Some(label) = self.success_label {
            config = config.with_success_label(label);
        }
        Ok((spec, config))
    }
}
