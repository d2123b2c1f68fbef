use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use dash_refresh::config::Config;
use dash_refresh::logging::init_tracing;
use dash_refresh::replay::replay;
use dash_refresh::store::DashboardStore;
use dash_refresh::ui::auto_refresh::AutoRefreshStatus;

/// Replay auto-refresh requests (one JSON object per line) and print the
/// resulting dashboard state.
#[derive(Debug, Parser)]
#[command(name = "dash-refresh", version, about)]
struct Cli {
    /// Config file (default: <config dir>/dash-refresh/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured default status.
    #[arg(long)]
    status: Option<AutoRefreshStatus>,

    /// Override the configured default interval, in milliseconds.
    #[arg(long, allow_negative_numbers = true)]
    interval: Option<f64>,

    /// Read requests from this file instead of stdin.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print only the final state.
    #[arg(long)]
    final_only: bool,

    /// Log every dispatch.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?
    .with_overrides(cli.status, cli.interval)
    .context("Invalid defaults")?;

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input '{}'", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut store = DashboardStore::new(config.auto_refresh);
    let mut stdout = io::stdout().lock();
    replay(&mut store, input, &mut stdout, cli.final_only)?;

    Ok(())
}
