use std::io::{self, Write};

use crate::commands::check::Report;

/// Writes the three report lines.
///
/// The format is consumed by scripts, so it stays plain: no colors and
/// Python-style `True`/`False`.
pub fn report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out, "Input number: {}", report.input)?;
    writeln!(out, "Is Fibonacci: {}", bool_label(report.is_fibonacci))?;
    writeln!(out, "Next Fibonacci: {}", report.next_fibonacci)?;
    out.flush()
}

pub fn failure(err: &anyhow::Error) {
    let _ = writeln!(io::stderr().lock(), "{err}");
}

fn bool_label(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
