//! Rendering of symbol table entries.
//!
//! The generated fragment is included between the braces of a C array
//! initializer, where a `SYM(e)` macro expands each name to a
//! `{value, name}` pair. Entry shape is fixed: four spaces of indentation,
//! `SYM(<name>),`, LF terminator.

use std::io::Write;

/// Render one symbol table entry, without the line terminator.
pub fn render_entry(name: &str) -> String {
    format!("    SYM({name}),")
}

/// Write one symbol table entry, LF-terminated.
pub fn write_entry<W: Write>(writer: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(writer, "    SYM({name}),")
}
