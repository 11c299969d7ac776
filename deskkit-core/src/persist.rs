//! JSON file persistence for record sequences.
//!
//! The on-disk layout is a single JSON array, pretty-printed with 4-space
//! indentation. Saves go through a temp file in the target's directory and a
//! rename, so an interrupted write never truncates the previous file. An
//! existing file's permissions carry over to its replacement.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::error::StoreError;

/// Read a record array from `path`.
///
/// A missing file is an empty sequence, not an error. Records are not
/// validated here; absent fields take their defaults.
pub fn load_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} not found, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let records: Vec<R> = serde_json::from_str(&text).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Overwrite `path` with the full record sequence.
pub fn save_records<R: Serialize>(records: &[R], path: &Path) -> Result<(), StoreError> {
    let buf = encode_pretty(records)?;

    let write_err = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    // Temp files start out owner-only; a replaced file keeps its own mode.
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_err)?;
    }
    tmp.write_all(&buf).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!("saved {} records to {}", records.len(), path.display());
    Ok(())
}

fn encode_pretty<R: Serialize>(records: &[R]) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser).map_err(StoreError::Encode)?;
    Ok(buf)
}
