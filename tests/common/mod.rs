use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes an `event,value` script to a temp file that lives as long as the handle.
pub fn write_script(rows: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "event,value")?;
    for (event, value) in rows {
        writeln!(file, "{event},{value}")?;
    }
    file.flush()?;
    Ok(file)
}
