use std::panic::Location;

use super::Failure;

/// "Operation X failed", optionally holding the failure that caused it.
///
/// The cause is owned exclusively by this value, so a chain is a singly
/// linked list that can only be built outward from already existing links.
/// That makes a cycle unrepresentable. Fields are private and there are no
/// setters; once constructed, neither the message nor the cause changes.
///
/// Each link records the source location that built it. Equality compares
/// message and cause only.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ChainedError {
    message: String,
    #[source]
    cause: Option<Box<Failure>>,
    location: &'static Location<'static>,
}

impl ChainedError {
    /// Construct a link with an optional cause. `None` makes this error the
    /// innermost link of its chain.
    #[track_caller]
    pub fn new(message: impl Into<String>, cause: Option<Failure>) -> Self {
        Self::from_parts(message.into(), cause.map(Box::new))
    }

    /// Wrap `cause` with this layer's message.
    #[track_caller]
    pub fn caused_by(message: impl Into<String>, cause: impl Into<Failure>) -> Self {
        Self::from_parts(message.into(), Some(Box::new(cause.into())))
    }

    /// Wrap a failure that is already boxed. The box is stored as-is, so
    /// `cause()` points at the very allocation passed in.
    #[track_caller]
    pub fn from_boxed(message: impl Into<String>, cause: Box<Failure>) -> Self {
        Self::from_parts(message.into(), Some(cause))
    }

    #[track_caller]
    fn from_parts(message: String, cause: Option<Box<Failure>>) -> Self {
        debug_assert!(!message.is_empty(), "chained error message must not be empty");
        Self {
            message,
            cause,
            location: Location::caller(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Failure> {
        self.cause.as_deref()
    }

    /// Where this link was constructed: the wrapping layer's call site.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Take the link apart. The values are moved out, not altered.
    pub fn into_parts(self) -> (String, Option<Box<Failure>>) {
        (self.message, self.cause)
    }

    /// Messages from this link down to the root cause.
    pub fn flatten(&self) -> Vec<&str> {
        let mut out = vec![self.message()];
        if let Some(cause) = self.cause() {
            out.extend(cause.chain().map(Failure::message));
        }
        out
    }
}

impl PartialEq for ChainedError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.cause == other.cause
    }
}

impl Eq for ChainedError {}
