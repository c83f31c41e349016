//! CLI entry point for inspecting and placing colored polyomino tiles

use clap::Parser;
use polytile::io::cli::Cli;

fn main() -> polytile::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();
    cli.run(&mut std::io::stdout().lock())
}
