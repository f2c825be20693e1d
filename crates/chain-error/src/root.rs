use std::panic::Location;

/// The originating failure of a chain: a message and nothing beneath it.
///
/// Equality compares messages only; the recorded location is diagnostic.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct RootFailure {
    message: String,
    location: &'static Location<'static>,
}

impl RootFailure {
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "root failure message must not be empty");
        Self {
            message,
            location: Location::caller(),
        }
    }

    /// Adopt a foreign error as an opaque root failure.
    ///
    /// Only the error's text is kept; its own `source()` chain is dropped.
    /// Use [`crate::Failure::from_std_chain`] to keep it. Adoption never
    /// fails: an error with empty display text is described by its `Debug`
    /// output instead.
    #[track_caller]
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        Self {
            message: describe(error),
            location: Location::caller(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where this failure was constructed.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl PartialEq for RootFailure {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for RootFailure {}

impl From<std::io::Error> for RootFailure {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::from_error(&err)
    }
}

/// Non-empty text for a foreign error.
pub(crate) fn describe(error: &(dyn std::error::Error + 'static)) -> String {
    let text = error.to_string();
    if !text.is_empty() {
        return text;
    }
    let debug = format!("{error:?}");
    if debug.is_empty() {
        "unknown error".to_string()
    } else {
        debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, thiserror::Error)]
    #[error("")]
    struct Silent;

    #[test]
    fn root_failure_has_no_source() {
        let root = RootFailure::new("baz error");
        assert_eq!(root.message(), "baz error");
        assert_eq!(root.to_string(), "baz error");
        assert!(root.source().is_none());
    }

    #[test]
    fn from_io_error_keeps_display_text() {
        let io = std::io::Error::other("network unreachable");
        let root = RootFailure::from(io);
        assert_eq!(root.message(), "network unreachable");
    }

    #[test]
    fn adopting_error_with_empty_text_does_not_panic() {
        let root = RootFailure::from_error(&Silent);
        assert_eq!(root.message(), "Silent");

        let root = RootFailure::from(std::io::Error::other(""));
        assert!(!root.message().is_empty());
    }

    #[test]
    fn records_construction_site() {
        let line = line!() + 1;
        let root = RootFailure::new("baz error");
        assert_eq!(root.location().file(), file!());
        assert_eq!(root.location().line(), line);
    }
}
