use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub(super) fn print_ok(field: &str, id: i64) -> Result<()> {
    print_json(&serde_json::json!({
        "status": "ok",
        field: id,
    }))
}

pub(super) fn read_notes_content(text: Option<String>, from: Option<PathBuf>) -> Result<String> {
    match (text, from) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read notes from {}", path.display())),
        (None, None) => bail!("notes set requires --text or --from"),
        (Some(_), Some(_)) => bail!("--text and --from are mutually exclusive"),
    }
}

pub(super) fn attachment_name(path: &Path, name: Option<String>) -> Result<String> {
    if let Some(name) = name {
        return Ok(name);
    }
    path.file_name()
        .and_then(|name| name.to_str())
        .map(ToString::to_string)
        .with_context(|| format!("cannot derive a file name from {}", path.display()))
}
