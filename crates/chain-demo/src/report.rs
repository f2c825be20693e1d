use std::io::Write;
use std::sync::Mutex;

use chain_error::pretty::ChainView;
use chain_error::{Failure, Rendered, ReportPolicy};
use tracing::warn;

use crate::config::RenderConfig;
use crate::error::Result;

/// Render a chain as text, or as pretty JSON when `json` is set.
pub fn format_failure(failure: &Failure, render: &RenderConfig, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&ChainView::new(failure))?);
    }
    Ok(Rendered::new(failure, render.style)
        .with_kind(render.show_kind)
        .with_location(render.show_location)
        .to_string())
}

/// Writes each reported chain to a writer (stdout in the binary).
pub struct WriterPolicy<W> {
    out: Mutex<W>,
    render: RenderConfig,
    json: bool,
}

impl<W: Write + Send> WriterPolicy<W> {
    pub fn new(out: W, render: RenderConfig, json: bool) -> Self {
        Self {
            out: Mutex::new(out),
            render,
            json,
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> ReportPolicy for WriterPolicy<W> {
    fn report(&self, failure: &Failure) {
        let text = match format_failure(failure, &self.render, self.json) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "falling back to plain rendering");
                Rendered::new(failure, self.render.style).to_string()
            }
        };
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{text}") {
            warn!(error = %e, "failed to write report");
        }
    }
}
