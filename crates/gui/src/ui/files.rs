//! File selection from the OS: native dialog and drag-and-drop

use std::path::{Path, PathBuf};

use shared::{accepted_extensions, is_accepted, FileMeta};

use crate::i18n::t;
use crate::state::chat::AttachedFile;

/// Metadata of a file on disk. Contents are never read.
pub fn meta_from_path(path: &Path) -> Option<FileMeta> {
    let name = path.file_name()?.to_string_lossy().into_owned();
    let size = match std::fs::metadata(path) {
        Ok(m) => m.len(),
        Err(e) => {
            tracing::warn!("Cannot stat {}: {e}", path.display());
            return None;
        }
    };
    Some(FileMeta::new(name, size, ""))
}

pub fn meta_from_dropped(file: &egui::DroppedFile) -> Option<FileMeta> {
    match &file.path {
        Some(path) => meta_from_path(path),
        None => {
            let size = file.bytes.as_ref().map_or(0, |b| b.len() as u64);
            Some(FileMeta::new(file.name.clone(), size, file.mime.clone()))
        }
    }
}

pub fn attachment_from_dropped(file: &egui::DroppedFile) -> Option<AttachedFile> {
    let meta = meta_from_dropped(file)?;
    if !is_accepted(&meta) {
        tracing::debug!("Ignoring unsupported attachment {}", meta.name);
        return None;
    }
    Some(AttachedFile::new(meta, file.path.clone()))
}

/// Open the native multi-file picker filtered to accepted types
pub fn pick_paths() -> Vec<PathBuf> {
    rfd::FileDialog::new()
        .set_title(t("files.browse"))
        .add_filter(t("files.accepted"), &accepted_extensions())
        .pick_files()
        .unwrap_or_default()
}

pub fn pick_metas() -> Vec<FileMeta> {
    pick_paths().iter().filter_map(|p| meta_from_path(p)).collect()
}

pub fn pick_attachments() -> Vec<AttachedFile> {
    pick_paths()
        .into_iter()
        .filter_map(|p| meta_from_path(&p).map(|meta| AttachedFile::new(meta, Some(p))))
        .collect()
}
