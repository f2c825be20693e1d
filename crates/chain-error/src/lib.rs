//! Chained errors: wrap a lower-level failure in a layer-specific error while
//! keeping the full causal chain back to the original failure.
//!
//! A chain has exactly two kinds of link, modelled by the closed [`Failure`]
//! union:
//! - [`RootFailure`]: the originating failure, with a message and no cause.
//! - [`ChainedError`]: a layer's own message plus the failure it observed.
//!
//! Layers build chains with [`ResultExt::wrap_err`] (or [`wrap`]), and the
//! consumer reads them back with [`flatten`] or [`Chain`].
//!
//! ```rust
//! use chain_error::{Failure, ResultExt, RootFailure};
//!
//! fn baz() -> Result<(), RootFailure> {
//!     Err(RootFailure::new("baz error"))
//! }
//!
//! fn bar() -> chain_error::Result<()> {
//!     baz().wrap_err("bar error")?;
//!     Ok(())
//! }
//!
//! fn foo() -> chain_error::Result<()> {
//!     bar().wrap_err("foo error")?;
//!     Ok(())
//! }
//!
//! let err: Failure = foo().unwrap_err();
//! assert_eq!(err.flatten(), ["foo error", "bar error", "baz error"]);
//! ```

pub mod chained;
pub mod failure;
pub mod inspect;
pub mod policy;
pub mod pretty;
pub mod render;
pub mod result_ext;
pub mod root;

// public exports
pub use chained::ChainedError;
pub use failure::Failure;
pub use inspect::{Chain, depth, flatten, flatten_std, root_cause};
pub use policy::{CombinedPolicy, NoopPolicy, ReportExt, ReportPolicy};
#[cfg(feature = "tracing")]
pub use policy::TracingPolicy;
pub use render::{RenderStyle, Rendered, render};
pub use result_ext::{ResultExt, wrap};
pub use root::RootFailure;

pub type Result<T, E = Failure> = std::result::Result<T, E>;
