//! Display helpers for panels

use std::fmt;
use std::str::FromStr;

use super::PanelKind;

impl PanelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PanelKind::Chat => "chat",
            PanelKind::FileUpload => "file-upload",
            PanelKind::Insight => "insight",
        }
    }

    /// Icon shown in panel headers and the context menu
    pub fn icon(self) -> &'static str {
        match self {
            PanelKind::Chat => "💬",
            PanelKind::FileUpload => "📄",
            PanelKind::Insight => "💡",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(PanelKind::Chat),
            "file-upload" | "file_upload" | "file" => Ok(PanelKind::FileUpload),
            "insight" => Ok(PanelKind::Insight),
            other => Err(format!("Unknown panel kind: {other}")),
        }
    }
}

/// First 8 characters of an ID, for logs and the status bar
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
