use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use boardkit::config::{Config, LayoutMode};
use boardkit::replay::{self, Script};
use boardkit::util;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BOARDKIT_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "boardkit")]
#[command(version = VERSION, about = "Whiteboard tool panel state machine with scripted session replay")]
struct Cli {
    /// Replay a JSON session script against an in-memory room
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Panel layout to render (overrides the config file)
    #[arg(long, short = 'l', value_enum, value_name = "LAYOUT")]
    layout: Option<LayoutMode>,

    /// Window size used to pick the layout in auto mode
    #[arg(long, short = 'w', value_name = "WxH", default_value = "1024x768", value_parser = parse_window)]
    window: (f64, f64),

    /// Print the final panel state as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Config file to use instead of ~/.config/boardkit/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn parse_window(input: &str) -> Result<(f64, f64), String> {
    util::parse_window_size(input).ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{input}'"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        println!("boardkit: Whiteboard tool panel state machine");
        println!();
        println!("Usage:");
        println!("  boardkit --script FILE [--layout auto|compact|regular] [--window WxH] [--json]");
        println!("  boardkit --help      Show help");
        println!();
        println!("A script is a JSON file with an initial room snapshot and a list of");
        println!("steps (regular/compact gestures, touch, stroke, room events). The");
        println!("steps run against an in-memory room and the resulting panel is printed.");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(layout) = cli.layout {
        config.ui.layout = layout;
    }

    let script = Script::load(&script_path)?;
    let outcome = replay::run(script, &config, cli.window)
        .await
        .with_context(|| format!("Failed to replay {}", script_path.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{outcome}");
    }

    Ok(())
}
