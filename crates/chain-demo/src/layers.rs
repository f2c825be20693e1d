//! A nested call sequence standing in for real application layers.
//!
//! Each configured layer calls the one below it. The operation under the
//! innermost layer always fails with a root failure; every wrapping layer on
//! the way out adds its own message, pass-through layers add nothing.

use chain_error::{Failure, ResultExt, RootFailure};
use tracing::{debug, instrument};

use crate::config::{DemoConfig, LayerConfig, LayerMode};

#[derive(Debug, Clone)]
pub struct CallStack<'a> {
    layers: &'a [LayerConfig],
    root_message: &'a str,
}

impl<'a> CallStack<'a> {
    pub fn new(layers: &'a [LayerConfig], root_message: &'a str) -> Self {
        Self {
            layers,
            root_message,
        }
    }

    pub fn from_config(config: &'a DemoConfig) -> Self {
        Self::new(&config.layers, &config.root_message)
    }

    /// Run the outermost layer.
    pub fn run(&self) -> chain_error::Result<()> {
        self.call(0)
    }

    #[instrument(level = "debug", skip(self))]
    fn call(&self, index: usize) -> chain_error::Result<()> {
        let Some(layer) = self.layers.get(index) else {
            debug!(root = self.root_message, "raising root failure");
            return Err(RootFailure::new(self.root_message).into());
        };

        let inner = self.call(index + 1);
        match layer.mode {
            LayerMode::Wrap => {
                inner.wrap_err_with(|| {
                    debug!(layer = %layer.name, "wrapping inner failure");
                    layer.message()
                })?;
            }
            LayerMode::PassThrough => {
                if inner.is_err() {
                    debug!(layer = %layer.name, "passing failure through");
                }
                inner?;
            }
        }
        Ok(())
    }
}

/// Run the stack described by `config` and return the failure it produced.
///
/// The innermost operation always fails, so this always yields a chain.
pub fn provoke(config: &DemoConfig) -> Failure {
    match CallStack::from_config(config).run() {
        Err(failure) => failure,
        Ok(()) => Failure::root(config.root_message.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stack_is_foo_bar_baz() {
        let failure = provoke(&DemoConfig::default());
        assert_eq!(failure.flatten(), vec!["foo error", "bar error", "baz error"]);
    }

    #[test]
    fn no_layers_gives_lone_root() {
        let mut cfg = DemoConfig::default();
        cfg.layers.clear();
        let failure = provoke(&cfg);
        assert!(failure.is_root());
        assert_eq!(failure.flatten(), vec!["baz error"]);
    }

    #[test]
    fn pass_through_layer_is_invisible_in_chain() {
        let mut cfg = DemoConfig::default();
        cfg.set_layer_names(["foo", "relay", "bar"]);
        cfg.pass_through("relay").expect("relay exists");
        let failure = provoke(&cfg);
        assert_eq!(failure.flatten(), vec!["foo error", "bar error", "baz error"]);
        assert_eq!(failure.depth(), cfg.wrapping_layers());
    }

    #[test]
    fn all_pass_through_surfaces_the_root_unchanged() {
        let mut cfg = DemoConfig::default();
        cfg.pass_through("foo").expect("foo");
        cfg.pass_through("bar").expect("bar");
        assert_eq!(provoke(&cfg), Failure::root("baz error"));
    }
}
