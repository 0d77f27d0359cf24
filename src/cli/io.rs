//! JSON output for one-shot commands
//!
//! One JSON document per line on stdout, UTF-8.

use std::io::Write;

use serde::Serialize;

use super::errors::CliResult;

/// Write `value` as one JSON line to `writer`
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
