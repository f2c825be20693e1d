use std::path::PathBuf;
use std::process::ExitCode;

use chain_error::{CombinedPolicy, RenderStyle, ReportPolicy, TracingPolicy};
use chain_demo::error::Result;
use chain_demo::report::WriterPolicy;
use chain_demo::tracing_setup::init_tracing;
use chain_demo::{DemoConfig, Overrides, provoke};
use clap::{Parser, ValueEnum};
use tracing::{error, info};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    CausedBy,
    Numbered,
    Inline,
}

impl From<StyleArg> for RenderStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::CausedBy => RenderStyle::CausedBy,
            StyleArg::Numbered => RenderStyle::Numbered,
            StyleArg::Inline => RenderStyle::Inline,
        }
    }
}

/// Run a nested call sequence whose innermost operation fails, and print the
/// chained error it produces.
#[derive(Parser, Debug)]
#[command(name = "chain-demo", version, about = "Nested error chain demo")]
struct Args {
    /// TOML file describing layers, root message and rendering
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated wrapping layers, outermost first (e.g. foo,bar)
    #[arg(long, value_delimiter = ',')]
    layers: Option<Vec<String>>,

    /// Make the named layer let failures through without wrapping (repeatable)
    #[arg(long = "pass-through")]
    pass_through: Vec<String>,

    /// Message of the innermost failure
    #[arg(long)]
    root_message: Option<String>,

    /// Rendering style for the printed chain
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Tag every link with its kind
    #[arg(long)]
    show_kind: bool,

    /// Print where each link was constructed
    #[arg(long)]
    show_location: bool,

    /// Print the chain as JSON
    #[arg(long)]
    json: bool,

    /// Also report the chain through tracing
    #[arg(long)]
    log: bool,
}

fn main() -> ExitCode {
    init_tracing("info");

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    config.apply_overrides(Overrides {
        layers: args.layers,
        pass_through: args.pass_through,
        root_message: args.root_message,
        style: args.style.map(Into::into),
        show_kind: args.show_kind,
        show_location: args.show_location,
    })?;

    info!(
        layers = config.layers.len(),
        wrapping = config.wrapping_layers(),
        "running call stack"
    );
    let failure = provoke(&config);

    let mut policy =
        CombinedPolicy::new().push(WriterPolicy::new(std::io::stdout(), config.render, args.json));
    if args.log {
        policy = policy.push(TracingPolicy::new(config.render.style));
    }
    policy.report(&failure);
    Ok(())
}
