// Validation outcome

/// Result of checking a rule against a request's arguments.
///
/// `Reject` carries the human-readable reason surfaced to the caller as the
/// response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The request may proceed to the handler
    Proceed,
    /// Short-circuit the pipeline with a client-error response
    Reject(String),
}

impl ValidationOutcome {
    /// Build a rejection from any message type
    pub fn reject(message: impl Into<String>) -> Self {
        ValidationOutcome::Reject(message.into())
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, ValidationOutcome::Proceed)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ValidationOutcome::Reject(_))
    }

    /// The rejection message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Proceed => None,
            ValidationOutcome::Reject(message) => Some(message),
        }
    }
}
