//! AQW CLI - run the air quality dashboard views against a dataset file.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aqw-cli",
    version,
    about = "U.S. air pollution dataset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: aqw_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("running {:?}", cli.command);
    aqw_cmd::run(cli.command)
}
