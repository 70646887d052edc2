//! Panel registry
//!
//! This module owns every panel on the board together with the z-order
//! counter. All mutations go through the narrow API in `panel_ops` and
//! `insight_ops`, so cascade deletion, zIndex uniqueness and the insight cap
//! are enforced in one place.

mod display;
mod insight_ops;
mod panel_ops;

pub use display::short_id;
pub use insight_ops::{chat_seed_text, insight_texts, MAX_INSIGHTS_PER_SOURCE, PANEL_SPACING};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::chat::ChatMessage;

/// Unique panel identifier (uuid v4)
pub type PanelId = String;

/// zIndex floor; the first panel created gets `BASE_PANEL_Z_INDEX + 2`
pub const BASE_PANEL_Z_INDEX: u64 = 20;

pub const CHAT_PANEL_SIZE: Vec2 = Vec2::new(400.0, 500.0);
pub const FILE_PANEL_SIZE: Vec2 = Vec2::new(450.0, 450.0);
pub const INSIGHT_PANEL_SIZE: Vec2 = Vec2::new(350.0, 250.0);

/// Kind of panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    Chat,
    FileUpload,
    Insight,
}

impl PanelKind {
    /// Fixed size of panels of this kind, in canvas units
    pub fn size(self) -> Vec2 {
        match self {
            PanelKind::Chat => CHAT_PANEL_SIZE,
            PanelKind::FileUpload => FILE_PANEL_SIZE,
            PanelKind::Insight => INSIGHT_PANEL_SIZE,
        }
    }
}

/// Kind-specific panel data
///
/// The upload panel's file list is panel-local UI state
/// (see `state::intake`), so it carries nothing here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PanelPayload {
    Chat { initial_messages: Vec<ChatMessage> },
    FileUpload,
    Insight { text: String },
}

impl PanelPayload {
    /// Default payload for a freshly created panel
    pub fn empty(kind: PanelKind) -> Self {
        match kind {
            PanelKind::Chat => PanelPayload::Chat {
                initial_messages: Vec::new(),
            },
            PanelKind::FileUpload => PanelPayload::FileUpload,
            PanelKind::Insight => PanelPayload::Insight {
                text: String::new(),
            },
        }
    }

    pub fn kind(&self) -> PanelKind {
        match self {
            PanelPayload::Chat { .. } => PanelKind::Chat,
            PanelPayload::FileUpload => PanelKind::FileUpload,
            PanelPayload::Insight { .. } => PanelKind::Insight,
        }
    }
}

/// A panel on the board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub id: PanelId,
    /// Top-left corner in canvas space
    pub position: Vec2,
    pub size: Vec2,
    pub z_index: u64,
    /// Upload panel an insight was derived from (relation, not ownership)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_panel_id: Option<PanelId>,
    pub payload: PanelPayload,
}

impl Panel {
    pub fn kind(&self) -> PanelKind {
        self.payload.kind()
    }

    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.position.x + self.size.x / 2.0, self.position.y + self.size.y)
    }

    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.position.x + self.size.x / 2.0, self.position.y)
    }

    /// Insight text, if this is an insight panel
    pub fn insight_text(&self) -> Option<&str> {
        match &self.payload {
            PanelPayload::Insight { text } => Some(text),
            _ => None,
        }
    }
}

/// Ordered collection of panels plus the monotonic zIndex counter
#[derive(Debug)]
pub struct PanelRegistry {
    /// Panels in creation order
    pub(crate) panels: Vec<Panel>,
    /// Last zIndex handed out; only ever grows
    pub(crate) z_counter: u64,
    /// Monotonically increasing version counter for change detection
    pub(crate) version: u64,
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self {
            panels: Vec::new(),
            z_counter: BASE_PANEL_Z_INDEX + 1,
            version: 0,
        }
    }
}

impl PanelRegistry {
    /// Current registry version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// All panels in creation order
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Get a panel by ID
    pub fn get(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Panel with the highest zIndex
    pub fn topmost(&self) -> Option<&Panel> {
        self.panels.iter().max_by_key(|p| p.z_index)
    }

    /// Panels sorted bottom to top (draw order)
    pub fn panels_by_z(&self) -> Vec<&Panel> {
        let mut sorted: Vec<&Panel> = self.panels.iter().collect();
        sorted.sort_by_key(|p| p.z_index);
        sorted
    }

    /// Insight panels derived from the given upload panel
    pub fn insights_for(&self, source_id: &str) -> Vec<&Panel> {
        self.panels
            .iter()
            .filter(|p| {
                p.kind() == PanelKind::Insight && p.source_panel_id.as_deref() == Some(source_id)
            })
            .collect()
    }

    /// Number of panels of one kind
    pub fn count_kind(&self, kind: PanelKind) -> usize {
        self.panels.iter().filter(|p| p.kind() == kind).count()
    }
}
