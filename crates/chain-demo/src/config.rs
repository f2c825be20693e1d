//! Demo configuration: which layers sit on the call stack, what the
//! innermost failure says, and how the resulting chain is rendered.
//!
//! Every field has a default, so an empty file (or no file) reproduces the
//! classic `foo -> bar -> baz` sequence.

use std::path::Path;

use chain_error::RenderStyle;
use serde::{Deserialize, Serialize};

use crate::error::{DemoError, Result};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LayerMode {
    /// Catch the inner failure and raise a new error caused by it.
    #[default]
    Wrap,
    /// Let the inner failure through untouched.
    PassThrough,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LayerConfig {
    pub name: String,
    #[serde(default)]
    pub mode: LayerMode,
    /// Message raised when wrapping; defaults to `"<name> error"`.
    #[serde(default)]
    pub message: Option<String>,
}

impl LayerConfig {
    pub fn wrapping(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: LayerMode::Wrap,
            message: None,
        }
    }

    pub fn message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("{} error", self.name))
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct RenderConfig {
    #[serde(default)]
    pub style: RenderStyle,
    #[serde(default)]
    pub show_kind: bool,
    /// Print the source location under each link.
    #[serde(default)]
    pub show_location: bool,
}

/// Command-line values layered over a loaded config. `None`/`false` leaves
/// the config value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub layers: Option<Vec<String>>,
    pub pass_through: Vec<String>,
    pub root_message: Option<String>,
    pub style: Option<RenderStyle>,
    pub show_kind: bool,
    pub show_location: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DemoConfig {
    /// Layers from outermost to innermost. The innermost operation below the
    /// last layer raises the root failure.
    #[serde(default = "default_layers")]
    pub layers: Vec<LayerConfig>,
    #[serde(default = "default_root_message")]
    pub root_message: String,
    #[serde(default)]
    pub render: RenderConfig,
}

fn default_layers() -> Vec<LayerConfig> {
    vec![LayerConfig::wrapping("foo"), LayerConfig::wrapping("bar")]
}

fn default_root_message() -> String {
    "baz error".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            layers: default_layers(),
            root_message: default_root_message(),
            render: RenderConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| DemoError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw).map_err(|source| DemoError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Replace the layer list with wrapping layers named in `names`.
    pub fn set_layer_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layers = names.into_iter().map(LayerConfig::wrapping).collect();
    }

    /// Turn the named layer into a pass-through layer.
    pub fn pass_through(&mut self, name: &str) -> Result<()> {
        let layer = self
            .layers
            .iter_mut()
            .find(|l| l.name == name)
            .ok_or_else(|| DemoError::UnknownLayer(name.to_string()))?;
        layer.mode = LayerMode::PassThrough;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.root_message.is_empty() {
            return Err(DemoError::EmptyRootMessage);
        }
        if let Some(index) = self.layers.iter().position(|l| l.name.is_empty()) {
            return Err(DemoError::EmptyLayerName { index });
        }
        if let Some(index) = self
            .layers
            .iter()
            .position(|l| l.message.as_deref() == Some(""))
        {
            return Err(DemoError::EmptyLayerMessage { index });
        }
        Ok(())
    }

    /// Apply command-line overrides, then validate the result.
    ///
    /// `layers` replaces the layer list before `pass_through` names are
    /// resolved, so pass-through names refer to the final list.
    pub fn apply_overrides(&mut self, overrides: Overrides) -> Result<()> {
        if let Some(names) = overrides.layers {
            self.set_layer_names(names);
        }
        for name in &overrides.pass_through {
            self.pass_through(name)?;
        }
        if let Some(message) = overrides.root_message {
            self.root_message = message;
        }
        if let Some(style) = overrides.style {
            self.render.style = style;
        }
        self.render.show_kind |= overrides.show_kind;
        self.render.show_location |= overrides.show_location;
        self.validate()
    }

    pub fn wrapping_layers(&self) -> usize {
        self.layers
            .iter()
            .filter(|l| l.mode == LayerMode::Wrap)
            .count()
    }
}
