//! Export and import of the collection as a JSON backup file
//!
//! The exchange format is the persisted one: a pretty-printed array of
//! `{ id, url, title, iconUrl }` objects.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde_json::{Map, Value};

use crate::core::{Bookmark, BookmarkId, BookmarkStore};
use crate::error::{BookdashError, Result};

pub const MSG_NOTHING_TO_EXPORT: &str = "There are no bookmarks to export";
const MSG_BAD_STRUCTURE: &str = "Invalid or corrupted bookmark file structure";

/// `bookmarks-backup-YYYY-MM-DD.json` for `date`
pub fn backup_filename(date: NaiveDate) -> String {
    format!("bookmarks-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Backup file name for today's local date
pub fn default_export_filename() -> String {
    backup_filename(Local::now().date_naive())
}

/// Default export path inside `dir`
pub fn default_export_path(dir: &Path) -> PathBuf {
    dir.join(default_export_filename())
}

/// Serialize the collection for export; an empty collection is rejected
pub fn export_json(store: &BookmarkStore) -> Result<String> {
    if store.is_empty() {
        return Err(BookdashError::validation(MSG_NOTHING_TO_EXPORT));
    }
    store.snapshot_for_export()
}

/// Write the export to `path`, returning the number of bookmarks written
pub fn export_to_file(store: &BookmarkStore, path: &Path) -> Result<usize> {
    let json = export_json(store)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json + "\n")?;
    log::info!("export: {} bookmark(s) to {}", store.len(), path.display());
    Ok(store.len())
}

/// Parse and validate an exchange document
///
/// Every entry needs non-empty string `id`, `url` and `title`. A missing or
/// empty `iconUrl` is replaced by `default_icon_url`.
pub fn parse_import(json: &str, default_icon_url: &str) -> Result<Vec<Bookmark>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| BookdashError::validation(format!("{}: {}", MSG_BAD_STRUCTURE, e)))?;
    let Value::Array(entries) = value else {
        return Err(BookdashError::validation(format!(
            "{}: expected an array of bookmarks",
            MSG_BAD_STRUCTURE
        )));
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(index, entry, default_icon_url))
        .collect()
}

fn parse_entry(index: usize, entry: &Value, default_icon_url: &str) -> Result<Bookmark> {
    let Value::Object(fields) = entry else {
        return Err(BookdashError::validation(format!(
            "{}: entry {} is not an object",
            MSG_BAD_STRUCTURE,
            index + 1
        )));
    };

    let required = |name: &str| -> Result<String> {
        match string_field(fields, name) {
            Some(s) if !s.is_empty() => Ok(s.to_string()),
            _ => Err(BookdashError::validation(format!(
                "{}: entry {} has no \"{}\"",
                MSG_BAD_STRUCTURE,
                index + 1,
                name
            ))),
        }
    };

    let id = required("id")?;
    let url = required("url")?;
    let title = required("title")?;
    let icon_url = match string_field(fields, "iconUrl") {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default_icon_url.to_string(),
    };

    Ok(Bookmark {
        id: BookmarkId::new(id),
        url,
        title,
        icon_url,
    })
}

fn string_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}

/// Read and validate an import file without touching the store
pub fn read_import(path: &Path, default_icon_url: &str) -> Result<Vec<Bookmark>> {
    let json = fs::read_to_string(path)?;
    parse_import(&json, default_icon_url)
}

/// Replace the collection with validated `records`, returning the new size
pub fn apply_import(store: &mut BookmarkStore, records: Vec<Bookmark>) -> usize {
    let snapshot = store.replace_all(records);
    log::info!("import: collection replaced with {} bookmark(s)", snapshot.len());
    snapshot.len()
}

/// Read, validate and apply an import file
///
/// On any error the collection is left unchanged.
pub fn import_from_file(
    store: &mut BookmarkStore,
    path: &Path,
    default_icon_url: &str,
) -> Result<usize> {
    let records = read_import(path, default_icon_url)?;
    Ok(apply_import(store, records))
}
