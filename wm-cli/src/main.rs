//! `wm-cli`: check what a weight trend page requests and what the backend
//! answers, without a browser.

use clap::Parser;
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "wm-cli",
    version,
    about = "Inspect weight trend chart requests and data",
    long_about = "Builds the /api/chartdata request a chart page issues for a given \
                  query string, or fetches it from a running backend and prints the \
                  chart table (date, trend, interval bounds) as CSV."
)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: wm_cmd::Command,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();
    wm_cmd::run(cli.command).await
}
