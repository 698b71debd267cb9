use std::io::Write;
use std::path::Path;

use anyhow::Context;

/// Write text to stdout or a file.
pub fn write_output(text: &str, output_path: Option<&str>) -> anyhow::Result<()> {
    match output_path {
        Some(path) => std::fs::write(Path::new(path), text)
            .with_context(|| format!("Failed to write output file '{}'", path)),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")
        }
    }
}

/// Serialize a value to JSON (pretty or compact), newline-terminated.
pub fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> anyhow::Result<String> {
    let mut json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("JSON serialization failed")?;
    json.push('\n');
    Ok(json)
}

/// Serialize rows as CSV under `header`.
pub fn to_csv<R: serde::Serialize>(
    header: &[&str],
    rows: impl IntoIterator<Item = R>,
) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("CSV flush failed: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output was not UTF-8")
}
