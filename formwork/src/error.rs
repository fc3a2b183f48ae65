//! Schema construction errors

use thiserror::Error;

/// Errors raised while building a form schema.
///
/// These only occur at configuration time. Validation outcomes at runtime
/// are always returned as data (`FieldResult` / `FieldError`), never as
/// errors.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The same field name was added to a form twice.
    #[error("duplicate field '{field}' in form '{form}'")]
    DuplicateField {
        /// Form the field was added to.
        form: String,
        /// The offending field name.
        field: String,
    },

    /// A pattern rule contained an invalid regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern source.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}
