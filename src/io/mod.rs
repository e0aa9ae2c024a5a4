//! Input parsing, output and the command-line front end

/// Command-line parsing and batch processing
pub mod cli;
/// Input format symbols and output constants
pub mod configuration;
/// Error type shared by every stage
pub mod error;
/// PNG export of stitched pictures
pub mod image;
/// Tile-list text parsing
pub mod parser;
/// Terminal progress bars for batch runs
pub mod progress;
