use std::io::Write;

use crate::errors::GenerationError;
use crate::model::GenerationReport;

/// Write one name per line.
pub fn write_names<W: Write>(writer: &mut W, names: &[String]) -> Result<(), GenerationError> {
    for name in names {
        writeln!(writer, "{name}")?;
    }
    Ok(())
}

/// Write the tokens, pattern tally, skipped patterns and duplicate count, one
/// fact per line.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &GenerationReport,
) -> Result<(), GenerationError> {
    writeln!(writer, "concept words: {}", report.concept_words.join(", "))?;
    writeln!(writer, "keywords: {}", report.keywords.join(", "))?;
    writeln!(
        writer,
        "patterns produced: {} of {}",
        report.produced_count(),
        report.patterns.len()
    )?;
    for (pattern, reason) in report.skipped() {
        writeln!(writer, "skipped {}: {}", pattern.id(), reason.as_str())?;
    }
    writeln!(writer, "duplicates removed: {}", report.duplicates_removed)?;
    Ok(())
}
