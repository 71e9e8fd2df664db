use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use eyre::{Result, WrapErr};
use unisym_core::{Extractor, ScanReport};

/// Run the whole transform: scan `input` for `UC_*` definitions and write
/// the `SYM(...)` entries to `output`, truncating any existing content.
///
/// The input is opened first, so a missing input leaves the output path
/// untouched. On later failures a partially written output file stays in
/// place; nothing is cleaned up.
pub fn generate(input: &Path, output: &Path) -> Result<ScanReport> {
    let reader = File::open(input)
        .map(BufReader::new)
        .wrap_err_with(|| format!("Failed to read {}", input.display()))?;

    let mut writer = File::create(output)
        .map(BufWriter::new)
        .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

    tracing::debug!(input = %input.display(), output = %output.display(), "scanning");

    let report = Extractor::new()
        .scan(reader, &mut writer)
        .wrap_err_with(|| format!("Failed to process {}", input.display()))?;

    tracing::debug!(lines = report.lines, symbols = report.symbols, "scan finished");

    Ok(report)
}
