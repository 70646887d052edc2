//! Panels derived from an upload panel: insights and "chat about files"

use glam::Vec2;
use shared::{FileMeta, Sender};

use super::{PanelId, PanelKind, PanelPayload, PanelRegistry, INSIGHT_PANEL_SIZE};
use crate::state::chat::ChatMessage;

/// Vertical gap between a source panel and the panels spawned below it
pub const PANEL_SPACING: f32 = 30.0;

/// Insight panels per source panel
pub const MAX_INSIGHTS_PER_SOURCE: usize = 3;

fn joined_names(files: &[FileMeta]) -> String {
    files
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Placeholder insight texts for a file set. Deterministic in the file
/// metadata (name, size, MIME type).
pub fn insight_texts(files: &[FileMeta]) -> [String; MAX_INSIGHTS_PER_SOURCE] {
    let names = joined_names(files);
    let overview = match files.first() {
        Some(f) => format!("{} ({}KB, type: {})", f.name, f.size_kb(), f.mime),
        None => "No file details".to_string(),
    };
    [
        format!(
            "Insight 1 from {names}:\nFile Overview: {overview}.\n\
             The AI would perform initial file type identification and structural assessment."
        ),
        format!(
            "Insight 2 from {names}:\nSimulated Data Structure.\n\
             The AI would attempt to determine headers (e.g., 'ID', 'Value', 'Timestamp') \
             and infer data types for columns/fields."
        ),
        format!(
            "Insight 3 from {names}:\nExample Key Finding.\n\
             A potential insight could be related to data distribution, outliers, or a summary \
             statistic like 'Average value is X' or 'Most common category is Y'."
        ),
    ]
}

/// Opening AI message of a chat spawned from an upload panel
pub fn chat_seed_text(files: &[FileMeta]) -> String {
    format!(
        "Let's discuss these files: {}. What would you like to know or do with them?",
        joined_names(files)
    )
}

impl PanelRegistry {
    /// Position and size of an upload panel, if `id` names one
    fn upload_source(&self, id: &str) -> Option<(Vec2, Vec2)> {
        self.get(id)
            .filter(|p| p.kind() == PanelKind::FileUpload)
            .map(|p| (p.position, p.size))
    }

    /// Spawn the insight panels for an upload panel.
    ///
    /// No-op when exactly `MAX_INSIGHTS_PER_SOURCE` insights already exist
    /// for the source. Otherwise any surviving insights of that source are
    /// replaced by a fresh full set, stacked below the source panel.
    ///
    /// Returns the IDs of the new panels (empty on no-op).
    pub fn request_insights(&mut self, source_id: &str, files: &[FileMeta]) -> Vec<PanelId> {
        if files.is_empty() {
            return Vec::new();
        }
        let Some((src_pos, src_size)) = self.upload_source(source_id) else {
            tracing::warn!("Insights requested for unknown upload panel {source_id}");
            return Vec::new();
        };

        let existing = self.insights_for(source_id).len();
        if existing == MAX_INSIGHTS_PER_SOURCE {
            tracing::info!("Full set of insights already displayed for {}", super::short_id(source_id));
            return Vec::new();
        }

        self.panels.retain(|p| {
            !(p.kind() == PanelKind::Insight && p.source_panel_id.as_deref() == Some(source_id))
        });

        let new_ids: Vec<PanelId> = insight_texts(files)
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let offset = i as f32 * (INSIGHT_PANEL_SIZE.y + PANEL_SPACING);
                let position = Vec2::new(src_pos.x, src_pos.y + src_size.y + PANEL_SPACING + offset);
                self.insert(
                    PanelPayload::Insight { text },
                    position,
                    Some(source_id.to_string()),
                )
            })
            .collect();

        tracing::info!(
            "Generated {} insights for {} (replaced {existing})",
            new_ids.len(),
            super::short_id(source_id)
        );
        new_ids
    }

    /// Spawn a chat panel directly below an upload panel, seeded with an AI
    /// message naming the files.
    pub fn request_chat(&mut self, source_id: &str, files: &[FileMeta]) -> Option<PanelId> {
        if files.is_empty() {
            return None;
        }
        let Some((src_pos, src_size)) = self.upload_source(source_id) else {
            tracing::warn!("Chat requested for unknown upload panel {source_id}");
            return None;
        };

        let position = Vec2::new(src_pos.x, src_pos.y + src_size.y + PANEL_SPACING);
        let seed = ChatMessage::new(Sender::Ai, chat_seed_text(files));
        let id = self.insert(
            PanelPayload::Chat {
                initial_messages: vec![seed],
            },
            position,
            None,
        );
        tracing::info!("Opened chat {} about {} file(s)", super::short_id(&id), files.len());
        Some(id)
    }
}
