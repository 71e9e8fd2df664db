//! unisym-core - Core library for symbol table extraction
//!
//! This crate provides the building blocks for extracting `UC_*` symbol
//! names from C header files and rendering them as `SYM(...)` entries,
//! ready to be `#include`d inside a C array initializer.
//!
//! # Example
//!
//! ```ignore
//! use std::io::{BufReader, BufWriter};
//! use unisym_core::Extractor;
//!
//! let input = BufReader::new(std::fs::File::open("unicode.h")?);
//! let mut output = BufWriter::new(std::fs::File::create("unicode_syms.h")?);
//!
//! let report = Extractor::new().scan(input, &mut output)?;
//! println!("{} symbols", report.symbols);
//! ```

mod emit;
mod extract;
mod symbol;

pub use emit::{render_entry, write_entry};
pub use extract::{ExtractError, Extractor, ScanReport};
pub use symbol::{SYMBOL_PREFIX, Symbol};
