//! CLI entry point for rendering a collage

use clap::Parser;
use tilecollage::io::cli::{Cli, CollageRunner};

fn main() -> tilecollage::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let mut runner = CollageRunner::new(cli);
    runner.run()
}
