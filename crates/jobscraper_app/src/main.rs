mod app;
mod cli;
mod effects;
mod logging;
mod persistence;
mod render;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let destination = if cli.log_terminal {
        logging::LogDestination::Both
    } else {
        logging::LogDestination::File
    };
    logging::initialize(destination);
    app::run(cli)
}
