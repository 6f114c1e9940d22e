//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RosterError`]
//! via `From`. Adapters box their error into [`RosterError::Storage`].

/// Top-level error returned by every application operation.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Caller-supplied input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Reading or writing the backing store failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Input validation failures. Every variant names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was not supplied.
    #[error("field `{0}` is required")]
    MissingField(&'static str),

    /// A required field was supplied but contains only whitespace.
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// A non-nullable field was explicitly set to `null`.
    #[error("field `{0}` must not be null")]
    NullField(&'static str),

    /// The `email` field is not a syntactically valid address.
    #[error("field `email` is not a valid email address: {0:?}")]
    InvalidEmail(String),
}

impl ValidationError {
    /// Name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) | Self::EmptyField(field) | Self::NullField(field) => field,
            Self::InvalidEmail(_) => "email",
        }
    }
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable kind of the missing thing (`Student`, `Tutor`).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}
