use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Opens the report destination: a newly created (or truncated) file at `path`, or stdout.
pub fn create_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not open {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Writes the rendered report to `out` and, when given, copies it to `writer`.
pub fn write_report(
    report: &str,
    out: &mut dyn Write,
    writer: &mut Option<&mut dyn Write>,
) -> io::Result<()> {
    out.write_all(report.as_bytes())?;
    out.flush()?;

    if let Some(w) = writer {
        w.write_all(report.as_bytes())?;
    }

    Ok(())
}
