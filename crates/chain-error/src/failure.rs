use std::panic::Location;

use super::inspect::{self, Chain};
use super::root::describe;
use super::{ChainedError, RootFailure};

/// Any link of a chain. The union is closed: a failure is either the root
/// of its chain or a wrapper around a deeper one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    #[error(transparent)]
    Root(#[from] RootFailure),
    #[error(transparent)]
    Chained(#[from] ChainedError),
}

impl Failure {
    /// Shorthand for a new root failure.
    #[track_caller]
    pub fn root(message: impl Into<String>) -> Self {
        Failure::Root(RootFailure::new(message))
    }

    /// Rebuild a foreign `std::error::Error` source chain as a `Failure`
    /// chain. Every error that has a source becomes a [`ChainedError`]; the
    /// last one becomes the [`RootFailure`]. Links whose display text is
    /// empty are described by their `Debug` output.
    #[track_caller]
    pub fn from_std_chain(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut outer = Vec::new();
        let mut current = error;
        while let Some(next) = current.source() {
            outer.push(describe(current));
            current = next;
        }
        let mut failure = Failure::Root(RootFailure::from_error(current));
        for message in outer.into_iter().rev() {
            failure = ChainedError::caused_by(message, failure).into();
        }
        failure
    }

    pub fn message(&self) -> &str {
        match self {
            Failure::Root(root) => root.message(),
            Failure::Chained(chained) => chained.message(),
        }
    }

    pub fn cause(&self) -> Option<&Failure> {
        match self {
            Failure::Root(_) => None,
            Failure::Chained(chained) => chained.cause(),
        }
    }

    pub fn location(&self) -> &'static Location<'static> {
        match self {
            Failure::Root(root) => root.location(),
            Failure::Chained(chained) => chained.location(),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Failure::Root(_))
    }

    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    pub fn flatten(&self) -> Vec<&str> {
        inspect::flatten(self)
    }

    pub fn depth(&self) -> usize {
        inspect::depth(self)
    }

    pub fn root_cause(&self) -> &Failure {
        inspect::root_cause(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, thiserror::Error)]
    enum LoadError {
        #[error("failed to load settings")]
        Read {
            #[source]
            source: std::io::Error,
        },
    }

    #[test]
    fn display_and_source_are_forwarded() {
        let err: Failure = ChainedError::caused_by("bar error", Failure::root("baz error")).into();
        assert_eq!(err.to_string(), "bar error");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("baz error"));
        assert!(!err.is_root());
        assert!(Failure::root("baz error").source().is_none());
    }

    #[test]
    fn from_std_chain_rebuilds_every_link() {
        let foreign = LoadError::Read {
            source: std::io::Error::other("permission denied"),
        };
        let failure = Failure::from_std_chain(&foreign);
        assert_eq!(
            failure.flatten(),
            vec!["failed to load settings", "permission denied"]
        );
        assert!(failure.root_cause().is_root());
    }

    #[derive(Debug, thiserror::Error)]
    #[error("")]
    struct Blank {
        #[source]
        source: std::io::Error,
    }

    #[test]
    fn from_std_chain_accepts_empty_display_text() {
        let failure = Failure::from_std_chain(&std::io::Error::other(""));
        assert!(failure.is_root());
        assert!(!failure.message().is_empty());

        let wrapped = Blank {
            source: std::io::Error::other(""),
        };
        let failure = Failure::from_std_chain(&wrapped);
        assert_eq!(failure.depth(), 1);
        assert!(failure.message().starts_with("Blank"));
        assert!(failure.flatten().iter().all(|m| !m.is_empty()));
    }

    #[test]
    fn from_std_chain_of_single_error_is_root() {
        let io = std::io::Error::other("disk full");
        let failure = Failure::from_std_chain(&io);
        assert_eq!(failure, Failure::root("disk full"));
    }
}
