use clap::Parser;
use hg_core::*;
use hg_gameroom::Rule;
use hg_gameroom::SetupError;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line configuration. Every flag falls back to an environment
/// variable, then to the compiled default.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Play Halli Galli from the console", long_about = None)]
pub struct Args {
    /// Card catalog to deal from
    #[arg(long, short, env = "HALLIGALLI_ASSETS", default_value = ASSET_PATH)]
    pub assets: PathBuf,
    /// Most recent cards considered on a ring
    #[arg(long, short, env = "HALLIGALLI_WINDOW", default_value_t = WINDOW_SIZE)]
    pub window: usize,
    /// Exact fruit count that wins
    #[arg(long, short, env = "HALLIGALLI_TARGET", default_value_t = WIN_COUNT)]
    pub target: Count,
    /// Delay between reveals, e.g. 7s, 500ms, 1m
    #[arg(long, short, env = "HALLIGALLI_INTERVAL", default_value = "7s", value_parser = interval)]
    pub interval: Duration,
}

fn interval(s: &str) -> Result<Duration, String> {
    parse_duration(s).ok_or_else(|| format!("invalid duration: {}", s))
}

impl TryFrom<&Args> for Rule {
    type Error = SetupError;
    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        Rule {
            window: args.window,
            target: args.target,
            interval: args.interval,
        }
        .validate()
    }
}
