use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use orion_error::prelude::*;
use orion_error::{ErrorOwe, ErrorOweBase};

use crate::error::{GenReason, GenResult};
use crate::record::Record;

/// Sibling path the dataset is staged at before the final rename.
pub fn temp_path(output_path: &Path) -> PathBuf {
    let mut name = output_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("dataset"));
    name.push(".tmp");
    output_path.with_file_name(name)
}

/// Write records as JSONL (one compact JSON object per line, generation
/// order, UTF-8 without escaping non-ASCII).
///
/// The file is staged at [`temp_path`] and renamed over `output_path` only
/// after every line is flushed, so a failure never leaves a truncated
/// dataset at the target. Any previous content at the target is replaced.
pub fn write_jsonl(records: &[Record], output_path: &Path) -> GenResult<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .owe_sys()
                .position(parent.display().to_string())?;
        }
    }

    let staging = temp_path(output_path);
    let result = write_lines(records, &staging).and_then(|()| {
        std::fs::rename(&staging, output_path)
            .owe_sys()
            .position(output_path.display().to_string())
    });
    if let Err(e) = result {
        if staging.exists() {
            if let Err(rm) = std::fs::remove_file(&staging) {
                rg_warn!(io, path = %staging.display(), error = %rm, "failed to remove staging file");
            }
        }
        return Err(e);
    }

    rg_debug!(io, path = %output_path.display(), records = records.len(), "dataset written");
    Ok(())
}

fn write_lines(records: &[Record], path: &Path) -> GenResult<()> {
    let file = File::create(path)
        .owe_sys()
        .position(path.display().to_string())?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let line = serde_json::to_string(record).owe(GenReason::Encode)?;
        writeln!(writer, "{}", line)
            .owe_sys()
            .position(path.display().to_string())?;
    }

    writer
        .flush()
        .owe_sys()
        .position(path.display().to_string())?;
    Ok(())
}

/// Read records back from a JSONL dataset. Blank lines are skipped.
pub fn read_jsonl(path: &Path) -> GenResult<Vec<Record>> {
    let file = File::open(path)
        .owe_sys()
        .position(path.display().to_string())?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.owe_sys().position(path.display().to_string())?;
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(&line)
            .owe(GenReason::Decode)
            .position(format!("{}:{}", path.display(), idx + 1))?;
        records.push(record);
    }

    Ok(records)
}
