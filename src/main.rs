//! CLI entry point for puzzle inspection, tile scoring and scrambling

use clap::Parser;
use seamscore::io::cli::{Cli, Runner};

fn main() -> seamscore::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let runner = Runner::new(cli);
    let mut stdout = std::io::stdout().lock();
    runner.run(&mut stdout)
}
