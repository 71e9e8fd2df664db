//! Command line surface.
//!
//! Exactly two positional arguments; anything else fails with a usage
//! message before any file is opened.

use clap::Parser;
use std::path::PathBuf;

/// Generate a SYM() table fragment from a Unicode defines header
#[derive(Debug, Parser)]
#[command(name = "unisym", version)]
pub struct Args {
    /// Header file containing `#define UC_*` lines
    pub input: PathBuf,

    /// Generated file receiving the `SYM(...)` entries (overwritten)
    pub output: PathBuf,
}
