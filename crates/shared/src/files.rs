//! File metadata passed around by the upload and chat panels.
//!
//! Only name, byte size and MIME type ever cross this boundary; file
//! contents are never read.

use serde::{Deserialize, Serialize};

/// Metadata of a user-selected file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type; empty when unknown
    #[serde(default)]
    pub mime: String,
}

impl FileMeta {
    /// Build metadata, inferring the MIME type from the extension when the
    /// host did not provide one.
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        let name = name.into();
        let mut mime = mime.into();
        if mime.is_empty() {
            mime = mime_for_name(&name).unwrap_or_default().to_string();
        }
        Self { name, size, mime }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// Size in KiB formatted with two decimals, e.g. `1.50`
    pub fn size_kb(&self) -> String {
        format!("{:.2}", self.size as f64 / 1024.0)
    }
}

/// Accepted upload types: (MIME type, extensions)
const ACCEPTED: &[(&str, &[&str])] = &[
    ("image/jpeg", &["jpeg", "jpg"]),
    ("image/png", &["png"]),
    ("image/gif", &["gif"]),
    ("image/webp", &["webp"]),
    ("application/pdf", &["pdf"]),
    ("application/msword", &["doc"]),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        &["docx"],
    ),
    ("application/vnd.ms-excel", &["xls"]),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        &["xlsx"],
    ),
    ("application/vnd.ms-powerpoint", &["ppt"]),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        &["pptx"],
    ),
    ("text/csv", &["csv"]),
    ("text/plain", &["txt"]),
];

fn extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// MIME type for a file name, if its extension is in the accepted table
pub fn mime_for_name(name: &str) -> Option<&'static str> {
    let ext = extension(name)?;
    ACCEPTED
        .iter()
        .find(|(_, exts)| exts.contains(&ext.as_str()))
        .map(|(mime, _)| *mime)
}

/// Whether a file may be dropped onto an upload or chat panel
pub fn is_accepted(file: &FileMeta) -> bool {
    ACCEPTED.iter().any(|(mime, _)| *mime == file.mime) || mime_for_name(&file.name).is_some()
}

/// Every accepted extension, for file dialog filters
pub fn accepted_extensions() -> Vec<&'static str> {
    ACCEPTED.iter().flat_map(|(_, exts)| exts.iter().copied()).collect()
}
