//! A policy for reporting a finished chain.
//!
//! Layers never log while wrapping; they only build the chain and return it.
//! Whoever finally receives the chain installs a `ReportPolicy` to decide
//! where it goes:
//! - tracing logs
//! - console output
//! - test capture
//!
//! Example
//! ```rust,ignore
//! use chain_error::{Failure, ReportPolicy, render, RenderStyle};
//!
//! struct PrintPolicy;
//! impl ReportPolicy for PrintPolicy {
//!     fn report(&self, e: &Failure) { eprintln!("{}", render(e, RenderStyle::CausedBy)); }
//! }
//! ```

#[cfg(feature = "tracing")]
use super::render::{RenderStyle, Rendered};
use super::Failure;

pub trait ReportPolicy: Send + Sync {
    /// Report the chain (log it, print it, record it)
    fn report(&self, failure: &Failure);
}

/// A policy that reports nothing
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl ReportPolicy for NoopPolicy {
    fn report(&self, _failure: &Failure) {}
}

/// Reports through `tracing`: one ERROR event for the whole chain, then one
/// DEBUG event per link.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy {
    style: RenderStyle,
}

#[cfg(feature = "tracing")]
impl TracingPolicy {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }
}

#[cfg(feature = "tracing")]
impl ReportPolicy for TracingPolicy {
    fn report(&self, failure: &Failure) {
        use tracing::{debug, error};

        error!(
            target: "chain_error",
            depth = failure.depth(),
            chain = %Rendered::new(failure, self.style),
            "{}",
            failure.message()
        );
        for (layer, link) in failure.chain().enumerate() {
            debug!(
                target: "chain_error",
                layer,
                root = link.is_root(),
                "{}",
                link.message()
            );
        }
    }
}

/// A policy that delegates to several policies, in insertion order.
///
/// Example
/// ```rust
/// use chain_error::{CombinedPolicy, Failure, NoopPolicy, ReportPolicy};
///
/// let policy = CombinedPolicy::new().push(NoopPolicy);
/// policy.report(&Failure::root("baz error"));
/// assert_eq!(policy.len(), 1);
/// ```
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn ReportPolicy>>,
}

impl CombinedPolicy {
    /// Create an empty CombinedPolicy.
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    /// Add a policy by value (boxed internally). Consumes and returns Self for builder-style chaining.
    pub fn push<P: ReportPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    /// Add an already boxed policy.
    pub fn add_boxed(mut self, policy: Box<dyn ReportPolicy>) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl ReportPolicy for CombinedPolicy {
    fn report(&self, failure: &Failure) {
        for p in &self.policies {
            p.report(failure);
        }
    }
}

/// Report a failed result through a policy and hand it back unchanged.
pub trait ReportExt<T> {
    fn report_err(self, policy: &impl ReportPolicy) -> Self;
}

impl<T> ReportExt<T> for Result<T, Failure> {
    fn report_err(self, policy: &impl ReportPolicy) -> Self {
        if let Err(ref e) = self {
            policy.report(e);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChainedError, RootFailure};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recording {
        seen: Arc<Mutex<Vec<Vec<String>>>>,
    }

    impl ReportPolicy for Recording {
        fn report(&self, failure: &Failure) {
            let messages = failure.flatten().into_iter().map(String::from).collect();
            self.seen.lock().expect("lock").push(messages);
        }
    }

    fn scenario_a() -> Failure {
        let bar = ChainedError::caused_by("bar error", RootFailure::new("baz error"));
        ChainedError::caused_by("foo error", bar).into()
    }

    #[test]
    fn combined_policy_reports_to_each_in_order() {
        let first = Recording::default();
        let second = Recording::default();
        let policy = CombinedPolicy::new()
            .push(first.clone())
            .push(NoopPolicy)
            .add_boxed(Box::new(second.clone()));
        assert_eq!(policy.len(), 3);

        policy.report(&scenario_a());

        let expected = vec![vec![
            "foo error".to_string(),
            "bar error".to_string(),
            "baz error".to_string(),
        ]];
        assert_eq!(*first.seen.lock().expect("lock"), expected);
        assert_eq!(*second.seen.lock().expect("lock"), expected);
    }

    #[test]
    fn report_err_only_fires_on_failure() {
        let rec = Recording::default();
        let ok: Result<u8, Failure> = Ok(1);
        assert_eq!(ok.report_err(&rec), Ok(1));
        assert!(rec.seen.lock().expect("lock").is_empty());

        let err: Result<u8, Failure> = Err(scenario_a());
        let back = err.clone().report_err(&rec);
        assert_eq!(back, err);
        assert_eq!(rec.seen.lock().expect("lock").len(), 1);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn tracing_policy_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        TracingPolicy::new(RenderStyle::Numbered).report(&scenario_a());
    }
}
