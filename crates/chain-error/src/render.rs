//! Text rendering of a chain for reporters: logs, console output, test
//! assertions. Every style prints every link; nothing is truncated.

use std::fmt;

use super::Failure;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Outermost message, then one `Caused by: ` line per deeper link.
    #[default]
    CausedBy,
    /// One line per link, prefixed with its layer index.
    Numbered,
    /// All messages on one line, joined with `": "`.
    Inline,
}

/// Display adapter that renders a chain in a given style.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    failure: &'a Failure,
    style: RenderStyle,
    show_kind: bool,
    show_location: bool,
}

impl<'a> Rendered<'a> {
    pub fn new(failure: &'a Failure, style: RenderStyle) -> Self {
        Self {
            failure,
            style,
            show_kind: false,
            show_location: false,
        }
    }

    /// Append `(chained)` or `(root)` to each message.
    pub fn with_kind(mut self, show_kind: bool) -> Self {
        self.show_kind = show_kind;
        self
    }

    /// Print where each link was constructed. Line styles put it on an
    /// indented `at` line under the link; the inline style appends it.
    pub fn with_location(mut self, show_location: bool) -> Self {
        self.show_location = show_location;
        self
    }

    fn write_link(&self, f: &mut fmt::Formatter<'_>, link: &Failure) -> fmt::Result {
        f.write_str(link.message())?;
        if self.show_kind {
            let kind = if link.is_root() { "root" } else { "chained" };
            write!(f, " ({kind})")?;
        }
        if self.show_location {
            match self.style {
                RenderStyle::Inline => write!(f, " [at {}]", link.location())?,
                RenderStyle::CausedBy | RenderStyle::Numbered => {
                    write!(f, "\n\tat {}", link.location())?
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (layer, link) in self.failure.chain().enumerate() {
            match (self.style, layer) {
                (RenderStyle::CausedBy, 0) | (RenderStyle::Inline, 0) => {}
                (RenderStyle::CausedBy, _) => f.write_str("\nCaused by: ")?,
                (RenderStyle::Inline, _) => f.write_str(": ")?,
                (RenderStyle::Numbered, 0) => f.write_str("0: ")?,
                (RenderStyle::Numbered, n) => write!(f, "\n{n}: ")?,
            }
            self.write_link(f, link)?;
        }
        Ok(())
    }
}

pub fn render(failure: &Failure, style: RenderStyle) -> String {
    Rendered::new(failure, style).to_string()
}
