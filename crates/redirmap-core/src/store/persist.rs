//! On-disk encoding and atomic replace of the rules file.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use super::StoreError;
use crate::rule::RuleSet;

/// Indentation used for the pretty-printed rules file.
const INDENT: &[u8] = b"    ";

/// Encode rules as pretty-printed JSON. Slashes are never escaped.
pub(super) fn encode(rules: &RuleSet) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    rules.serialize(&mut ser).map_err(StoreError::Serialize)?;
    Ok(buf)
}

/// Decode rules from raw file contents.
pub(super) fn decode(bytes: &[u8]) -> serde_json::Result<RuleSet> {
    serde_json::from_slice(bytes)
}

/// Replace `path` with `bytes` so readers see either the old or the new
/// contents, never a partial write.
///
/// Writes a temp file in the same directory, syncs it, then renames it over
/// `path`. An existing file's permissions are carried over to the new one.
pub(super) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(tmp.path(), e))?;

    if let Ok(meta) = fs::metadata(path) {
        if let Err(e) = tmp.as_file().set_permissions(meta.permissions()) {
            tracing::warn!(path = %path.display(), "could not copy permissions to new rules file: {}", e);
        }
    }

    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}
