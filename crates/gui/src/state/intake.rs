//! File list of a single upload panel
//!
//! Panel-local state, not part of the registry.

use shared::{is_accepted, FileMeta};

/// Files kept per upload panel
pub const MAX_FILES: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileIntake {
    files: Vec<FileMeta>,
}

impl FileIntake {
    pub fn files(&self) -> &[FileMeta] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// "Chat about files" and "Get insights" are only enabled with files
    pub fn can_act(&self) -> bool {
        !self.files.is_empty()
    }

    /// Append dropped or picked files. Unsupported types are rejected and
    /// anything past `MAX_FILES` is dropped.
    ///
    /// Returns how many files were kept.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = FileMeta>) -> usize {
        let before = self.files.len();
        for file in files {
            if !is_accepted(&file) {
                tracing::debug!("Rejected unsupported file {} ({})", file.name, file.mime);
                continue;
            }
            if self.files.len() == MAX_FILES {
                tracing::debug!("File limit reached, dropping {}", file.name);
                continue;
            }
            self.files.push(file);
        }
        self.files.len() - before
    }

    /// Remove every entry with this name
    pub fn remove_file(&mut self, name: &str) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.name != name);
        self.files.len() != before
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
