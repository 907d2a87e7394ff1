//! Progress and configuration output formatting.
//!
//! Progress goes to a caller-supplied writer rather than straight to the
//! process stderr, so tests can capture it and quiet mode can suppress it.

use crate::plan::CompilationUnit;
use camino::Utf8Path;
use std::io::Write;

/// Writes a single line to the given writer, ignoring write failures.
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

/// Formats the final success message.
#[must_use]
pub fn success_message(unit_count: usize, output_dir: &Utf8Path) -> String {
    let plural = if unit_count == 1 { "unit" } else { "units" };
    format!("Build complete: {unit_count} {plural} compiled, output staged to {output_dir}")
}

/// Configuration information for dry-run output.
#[derive(Debug)]
pub struct DryRunInfo<'a> {
    /// Root of the Java source tree.
    pub source_root: &'a Utf8Path,
    /// The library directory checked for dependencies.
    pub lib_dir: &'a Utf8Path,
    /// The output directory that would be rebuilt.
    pub output_dir: &'a Utf8Path,
    /// The compiler executable.
    pub javac: &'a str,
    /// The archiver executable.
    pub jar_tool: &'a str,
    /// Whether lenient failure handling is enabled.
    pub lenient: bool,
    /// The units that would be compiled.
    pub units: &'a [CompilationUnit],
}

impl DryRunInfo<'_> {
    /// Formats the dry-run information for display.
    #[must_use]
    pub fn display_text(&self) -> String {
        let mut lines = vec![
            "Dry run - no files will be modified".to_owned(),
            String::new(),
            format!("Source root: {}", self.source_root),
            format!("Library directory: {}", self.lib_dir),
            format!("Output directory: {}", self.output_dir),
            format!("Compiler: {}", self.javac),
            format!("Archiver: {}", self.jar_tool),
            format!("Lenient: {}", self.lenient),
            String::new(),
            "Units to compile:".to_owned(),
        ];

        for unit in self.units {
            lines.push(format!("  - {unit}"));
        }

        lines.join("\n")
    }
}
