//! Panel CRUD and stacking operations

use glam::Vec2;

use super::{Panel, PanelId, PanelKind, PanelPayload, PanelRegistry};

impl PanelRegistry {
    /// Hand out the next zIndex
    pub(crate) fn next_z(&mut self) -> u64 {
        self.z_counter += 1;
        self.z_counter
    }

    /// Append a panel with the given payload; it becomes the topmost panel.
    pub(crate) fn insert(
        &mut self,
        payload: PanelPayload,
        position: Vec2,
        source_panel_id: Option<PanelId>,
    ) -> PanelId {
        let id = uuid::Uuid::new_v4().to_string();
        let kind = payload.kind();
        let z_index = self.next_z();

        self.panels.push(Panel {
            id: id.clone(),
            position,
            size: kind.size(),
            z_index,
            source_panel_id,
            payload,
        });

        self.version += 1;
        tracing::debug!("Created {kind} panel {} at {position} (z {z_index})", super::short_id(&id));
        id
    }

    /// Create a panel with default payload at a canvas position
    pub fn create_panel(&mut self, kind: PanelKind, position: Vec2) -> PanelId {
        self.insert(PanelPayload::empty(kind), position, None)
    }

    /// Remove a panel. Removing an upload panel also removes every panel
    /// derived from it, in the same update.
    ///
    /// Returns the IDs of all removed panels (empty if `id` is unknown).
    pub fn remove_panel(&mut self, id: &str) -> Vec<PanelId> {
        let Some(panel) = self.get(id) else {
            return Vec::new();
        };
        let cascade = panel.kind() == PanelKind::FileUpload;

        let mut removed = Vec::new();
        self.panels.retain(|p| {
            let gone = p.id == id || (cascade && p.source_panel_id.as_deref() == Some(id));
            if gone {
                removed.push(p.id.clone());
            }
            !gone
        });

        self.version += 1;
        tracing::debug!("Removed {} panel(s) for {}", removed.len(), super::short_id(id));
        removed
    }

    /// Raise a panel above every other panel.
    ///
    /// Returns false for unknown IDs.
    pub fn bring_to_front(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        let z = self.next_z();
        if let Some(panel) = self.get_mut(id) {
            panel.z_index = z;
        }
        self.version += 1;
        true
    }

    /// Overwrite a panel's canvas position. No clamping: the canvas is unbounded.
    pub fn move_panel(&mut self, id: &str, position: Vec2) -> bool {
        match self.get_mut(id) {
            Some(panel) => {
                panel.position = position;
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Remove every panel. The zIndex counter keeps growing.
    pub fn clear(&mut self) {
        self.panels.clear();
        self.version += 1;
    }
}
