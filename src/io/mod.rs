//! Input/output: command line, prompts, image files and spreadsheet export

/// Command-line arguments, logging setup and application entry
pub mod cli;
/// Constants shared across the workflow
pub mod configuration;
/// Error types for every fallible operation
pub mod error;
/// Image loading, resizing, previews and PNG output
pub mod image;
/// Progress display for long-running stages
pub mod progress;
/// Request/response prompts for the interactive workflow
pub mod prompt;
/// Spreadsheet export of a mosaic
pub mod spreadsheet;
/// The linear pick → resize → quantize → export workflow
pub mod workflow;
