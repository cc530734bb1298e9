// src/bin/cli.rs
use lc_stats::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
