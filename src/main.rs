//! CLI entry point for spelling words with periodic table element symbols

use clap::Parser;
use periodic_writer::io::cli::{Cli, Writer};

fn main() -> periodic_writer::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    Writer::new(cli).run()
}
