//! Read-only traversal from the outermost failure to the root cause.
//!
//! Traversal is iterative and linear in the chain length. It terminates
//! because a chain is an owned list and cannot refer back to itself.

use std::iter::FusedIterator;

use super::Failure;

/// Iterator over the links of a chain, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Failure>,
}

impl<'a> Chain<'a> {
    pub fn new(head: &'a Failure) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Failure;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Messages of every link, outermost first and root cause last.
///
/// The result is never empty; its length is one more than the number of
/// wrapping layers.
pub fn flatten(err: &Failure) -> Vec<&str> {
    Chain::new(err).map(Failure::message).collect()
}

/// Number of wrapping layers above the root cause.
pub fn depth(err: &Failure) -> usize {
    Chain::new(err).count() - 1
}

pub fn root_cause(err: &Failure) -> &Failure {
    let mut current = err;
    while let Some(cause) = current.cause() {
        current = cause;
    }
    current
}

/// [`flatten`] for any `std::error::Error`, following `source()`.
pub fn flatten_std(err: &(dyn std::error::Error + 'static)) -> Vec<String> {
    std::iter::successors(Some(err), |e| e.source())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChainedError, RootFailure};

    fn scenario_a() -> Failure {
        let baz = RootFailure::new("baz error");
        let bar = ChainedError::caused_by("bar error", baz);
        ChainedError::caused_by("foo error", bar).into()
    }

    #[test]
    fn flatten_lists_outermost_first() {
        let err = scenario_a();
        assert_eq!(flatten(&err), vec!["foo error", "bar error", "baz error"]);
        assert_eq!(depth(&err), 2);
        assert_eq!(root_cause(&err).message(), "baz error");
    }

    #[test]
    fn lone_root_flattens_to_one_message() {
        let err = Failure::root("baz error");
        assert_eq!(flatten(&err), vec!["baz error"]);
        assert_eq!(depth(&err), 0);
        assert!(std::ptr::eq(root_cause(&err), &err));
    }

    #[test]
    fn chained_without_cause_ends_the_chain() {
        let err: Failure = ChainedError::caused_by("outer", ChainedError::new("inner", None)).into();
        assert_eq!(flatten(&err), vec!["outer", "inner"]);
        assert!(!root_cause(&err).is_root());
    }

    #[test]
    fn chain_is_fused() {
        let err = Failure::root("only");
        let mut chain = err.chain();
        assert!(chain.next().is_some());
        assert!(chain.next().is_none());
        assert!(chain.next().is_none());
    }

    #[test]
    fn flatten_std_agrees_with_flatten() {
        let err = scenario_a();
        assert_eq!(flatten_std(&err), flatten(&err));
    }

    #[test]
    fn deep_chain_flattens_without_recursion() {
        let mut err = Failure::root("root");
        for layer in 0..10_000 {
            err = ChainedError::caused_by(format!("layer {layer}"), err).into();
        }
        let messages = flatten(&err);
        assert_eq!(messages.len(), 10_001);
        assert_eq!(messages.first().copied(), Some("layer 9999"));
        assert_eq!(messages.last().copied(), Some("root"));
        assert_eq!(depth(&err), 10_000);
        // Dropping a Box chain this deep recurses once per link; keep it on
        // a thread with a larger stack.
        std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(move || drop(err))
            .expect("spawn drop thread")
            .join()
            .expect("drop thread");
    }
}
