//! Structured, log-friendly view of a chain.
//!
//! This is gated behind the `serde` feature to avoid pulling serialization
//! dependencies into consumers that don't need them.

#![cfg(feature = "serde")]

use serde::Serialize;

use super::Failure;

/// Provide a structured view of an error for logging/UI.
///
/// Implementors expose a lightweight set of serializable fields; callers can
/// choose between the raw fields, a `serde_json::Value`, or a pretty JSON
/// string for human consumption.
pub trait PrettyDebug {
    type Fields<'a>: Serialize + 'a
    where
        Self: 'a;

    /// Return the structured fields, if available.
    fn fields(&self) -> Option<Self::Fields<'_>>;

    /// Convert fields to a JSON value without pretty whitespace.
    fn to_value(&self) -> Option<serde_json::Value> {
        self.fields().and_then(|f| serde_json::to_value(&f).ok())
    }

    /// Convert fields to a pretty JSON string (for logs or UI).
    fn pretty_json(&self) -> Option<String> {
        self.fields()
            .and_then(|f| serde_json::to_string_pretty(&f).ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Chained,
    Root,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView<'a> {
    pub layer: usize,
    pub kind: LinkKind,
    pub message: &'a str,
    /// `file:line:column` of the code that built the link.
    pub location: String,
}

/// Every link of a chain, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainView<'a> {
    pub depth: usize,
    pub links: Vec<LinkView<'a>>,
}

impl<'a> ChainView<'a> {
    pub fn new(failure: &'a Failure) -> Self {
        let links: Vec<LinkView<'a>> = failure
            .chain()
            .enumerate()
            .map(|(layer, link)| LinkView {
                layer,
                kind: if link.is_root() {
                    LinkKind::Root
                } else {
                    LinkKind::Chained
                },
                message: link.message(),
                location: link.location().to_string(),
            })
            .collect();
        Self {
            depth: links.len() - 1,
            links,
        }
    }
}

impl PrettyDebug for Failure {
    type Fields<'a> = ChainView<'a>;

    fn fields(&self) -> Option<Self::Fields<'_>> {
        Some(ChainView::new(self))
    }
}
