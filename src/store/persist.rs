// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing the notebook file.
//!
//! The file is a pretty-printed JSON array of records. Writes go to a sibling
//! temp file that is fsynced and then renamed over the destination, so a
//! failed save leaves the previous file exactly as it was. The replacement
//! keeps the old file's permissions, and a symlinked notebook stays a link.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::types::Record;

/// Parse notebook content into records, preserving array order.
///
/// Content must be a JSON array of objects with string `label` (or legacy
/// `title`/`bug`) and `solution` fields. Empty content is not an empty
/// notebook; only a missing file is.
pub fn parse_records(content: impl AsRef<[u8]>) -> serde_json::Result<Vec<Record>> {
    serde_json::from_slice(content.as_ref())
}

/// Load records from `path`.
///
/// A missing file is the first-run case and yields an empty list. Any other
/// read failure is [`StoreError::Io`]; bad content is [`StoreError::Parse`].
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no notebook file yet, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };

    let records = parse_records(&bytes).map_err(|e| StoreError::parse(path, e))?;
    info!(path = %path.display(), records = records.len(), "loaded notebook");
    Ok(records)
}

/// Save `records` to `path` atomically, in order, pretty-printed.
pub fn save_records(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let path = path.as_ref();

    let mut payload =
        serde_json::to_vec_pretty(records).map_err(|e| StoreError::io(path, e.into()))?;
    payload.push(b'\n');

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    // A symlinked notebook is written through to its target
    let dest = resolve_destination(path);

    // Atomic write: temp + fsync + rename
    let tmp_path = temp_path(&dest);
    if let Err(e) = write_synced(&tmp_path, &payload, &dest) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::io(&tmp_path, e));
    }
    if let Err(e) = fs::rename(&tmp_path, &dest) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::io(&dest, e));
    }

    info!(
        path = %path.display(),
        records = records.len(),
        bytes = payload.len(),
        "saved notebook"
    );
    Ok(())
}

/// `notes.json` → `notes.json.tmp`, in the same directory so rename stays on
/// one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("notebook"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Follow `path` if it is a symlink. A dangling link is replaced.
fn resolve_destination(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_symlink() => path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}

/// Write and fsync the temp file, carrying over the permissions of the file
/// it will replace.
fn write_synced(path: &Path, payload: &[u8], replaces: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(payload)?;
    if let Ok(meta) = fs::metadata(replaces) {
        file.set_permissions(meta.permissions())?;
    }
    file.sync_all()?;
    debug!(path = %path.display(), "temp file synced");
    Ok(())
}
