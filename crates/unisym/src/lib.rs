//! unisym - Generate `SYM()` table fragments from Unicode defines headers
//!
//! unisym scans a header for `#define UC_*` macro definitions and writes one
//! `    SYM(UC_*),` entry per definition into a generated file. The fragment
//! is meant to be `#include`d inside a C array initializer that maps
//! character values to their symbolic names.

pub mod cli;
mod generate;

pub use generate::generate;
pub use unisym_core::ScanReport;
