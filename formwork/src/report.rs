//! Validation outcome types.

/// Validation verdict for a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldResult {
    /// The field passed all of its rules.
    #[default]
    Valid,
    /// The field failed a rule, with the failure message to display.
    Invalid(String),
}

impl FieldResult {
    /// Check if the field passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Get the failure message (if any).
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

/// Error information for a single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: String,
    /// Human-readable validation error message.
    pub message: String,
}

impl FieldError {
    /// Creates a new field validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of validating every field of a form against one value snapshot.
///
/// Entries keep the declaration order of the form's fields, so iteration
/// and error listings are deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    form_id: String,
    entries: Vec<(String, FieldResult)>,
}

impl ValidationReport {
    pub(crate) fn new(form_id: String, entries: Vec<(String, FieldResult)>) -> Self {
        Self { form_id, entries }
    }

    /// Get the id of the validated form.
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Check if every field passed validation.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|(_, result)| result.is_valid())
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the number of validated fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the report covers no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the result for one field.
    pub fn get(&self, field: &str) -> Option<&FieldResult> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, result)| result)
    }

    /// Iterate over results in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldResult)> {
        self.entries
            .iter()
            .map(|(name, result)| (name.as_str(), result))
    }

    /// Collect all failures in declaration order.
    pub fn errors(&self) -> Vec<FieldError> {
        self.entries
            .iter()
            .filter_map(|(name, result)| {
                result
                    .message()
                    .map(|message| FieldError::new(name.clone(), message))
            })
            .collect()
    }

    /// Get the first failure (if any).
    pub fn first_error(&self) -> Option<FieldError> {
        self.entries.iter().find_map(|(name, result)| {
            result
                .message()
                .map(|message| FieldError::new(name.clone(), message))
        })
    }

    /// Get the name of the first invalid field (for focusing).
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, result)| !result.is_valid())
            .map(|(name, _)| name.as_str())
    }
}
