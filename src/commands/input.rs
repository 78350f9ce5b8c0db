use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

use crate::runtime::Runtime;

/// Reads text from a file path, or from stdin when `source` is `-`.
pub(crate) fn read_input<R: Runtime>(runtime: &R, source: &str) -> Result<String> {
    if source == "-" {
        runtime.read_stdin()
    } else {
        runtime.read_to_string(Path::new(source))
    }
}

/// Reads and parses a JSON document from a file path or stdin.
pub(crate) fn read_json<R: Runtime>(runtime: &R, source: &str) -> Result<Value> {
    let text = read_input(runtime, source)?;
    let name = if source == "-" { "stdin" } else { source };
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", name))
}

/// Pretty-prints a response value followed by a newline.
pub(crate) fn write_json<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to write JSON output")?;
    writeln!(out)?;
    Ok(())
}
