//! CLI entry point for reassembling tile puzzles

use clap::Parser;
use tilestitch::io::cli::{Cli, FileProcessor};

fn main() -> tilestitch::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process(&mut std::io::stdout().lock())
}
