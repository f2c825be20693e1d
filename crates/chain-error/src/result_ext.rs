use super::{ChainedError, Failure};

/// Wrap `failure` with a layer-specific message.
#[track_caller]
pub fn wrap(message: impl Into<String>, failure: impl Into<Failure>) -> ChainedError {
    ChainedError::caused_by(message, failure)
}

/// Extension trait for `Result` implementing the propagation discipline at
/// a layer boundary.
///
/// On `Err`, the observed failure is moved into a new [`ChainedError`]
/// carrying this layer's message. On `Ok`, the value passes through and
/// nothing is allocated. The new link records the caller's location.
///
/// Example
/// ```rust
/// use chain_error::ResultExt;
///
/// fn read_settings() -> Result<String, std::io::Error> {
///     Err(std::io::Error::other("permission denied"))
/// }
///
/// fn load() -> chain_error::Result<String> {
///     let raw = read_settings()
///         .map_err(chain_error::RootFailure::from)
///         .wrap_err("failed to load settings")?;
///     Ok(raw)
/// }
///
/// let err = load().unwrap_err();
/// assert_eq!(err.flatten(), ["failed to load settings", "permission denied"]);
/// ```
pub trait ResultExt<T> {
    /// If the result is an error, wrap it with `message`
    fn wrap_err(self, message: impl Into<String>) -> Result<T, ChainedError>;

    /// Like [`ResultExt::wrap_err`], building the message only on failure
    fn wrap_err_with<M, F>(self, message: F) -> Result<T, ChainedError>
    where
        M: Into<String>,
        F: FnOnce() -> M;

    /// Unify the error type without adding a link. Used by layers that let
    /// failures pass through.
    fn into_failure(self) -> Result<T, Failure>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Failure>,
{
    #[track_caller]
    fn wrap_err(self, message: impl Into<String>) -> Result<T, ChainedError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(ChainedError::caused_by(message, e)),
        }
    }

    #[track_caller]
    fn wrap_err_with<M, F>(self, message: F) -> Result<T, ChainedError>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(ChainedError::caused_by(message(), e)),
        }
    }

    fn into_failure(self) -> Result<T, Failure> {
        self.map_err(Into::into)
    }
}

/// Iterator helper over results at a layer boundary.
///
/// `wrap_all` wraps every failure with the same message and leaves the
/// successes untouched.
pub trait IterResultExt<T>: Sized {
    fn wrap_all(self, message: &str) -> Vec<Result<T, ChainedError>>;
}

impl<I, T, E> IterResultExt<T> for I
where
    I: IntoIterator<Item = Result<T, E>>,
    E: Into<Failure>,
{
    #[track_caller]
    fn wrap_all(self, message: &str) -> Vec<Result<T, ChainedError>> {
        let mut out = Vec::new();
        for r in self {
            out.push(r.wrap_err(message));
        }
        out
    }
}
