use std::io::Write;

use serde::Serialize;

use crate::errors::GenerationError;

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<(), GenerationError> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
