//! Connector lines between upload panels and their insights
//!
//! Derived data: recomputed from the registry on every frame.

use glam::Vec2;

use super::registry::{PanelId, PanelKind, PanelRegistry};
use super::viewport::Viewport;

/// Line stroke width in canvas units
pub const LINK_STROKE: f32 = 2.0;
pub const LINK_DASH: f32 = 8.0;
pub const LINK_GAP: f32 = 4.0;

/// One connector, in canvas space
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub source_id: PanelId,
    pub insight_id: PanelId,
    /// Bottom-center of the source panel
    pub from: Vec2,
    /// Top-center of the insight panel
    pub to: Vec2,
}

impl Link {
    /// Endpoints on screen. Panel positions follow the zoom but their size
    /// does not, so each anchor keeps its unscaled offset from its panel.
    pub fn screen_segment(&self, registry: &PanelRegistry, viewport: &Viewport) -> Option<(Vec2, Vec2)> {
        let source = registry.get(&self.source_id)?;
        let insight = registry.get(&self.insight_id)?;
        let from = viewport.panel_screen_rect(source.position, source.size).min
            + (self.from - source.position);
        let to = viewport.panel_screen_rect(insight.position, insight.size).min
            + (self.to - insight.position);
        Some((from, to))
    }
}

/// Links for every insight panel whose source still exists
pub fn compute_links(registry: &PanelRegistry) -> Vec<Link> {
    registry
        .panels()
        .iter()
        .filter(|p| p.kind() == PanelKind::Insight)
        .filter_map(|insight| {
            let source = registry.get(insight.source_panel_id.as_deref()?)?;
            Some(Link {
                source_id: source.id.clone(),
                insight_id: insight.id.clone(),
                from: source.bottom_center(),
                to: insight.top_center(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::registry::{Panel, PanelPayload};
    use shared::FileMeta;

    #[test]
    fn test_links_follow_panels() {
        let mut reg = PanelRegistry::default();
        let src = reg.create_panel(PanelKind::FileUpload, Vec2::new(0.0, 0.0));
        let ids = reg.request_insights(&src, &[FileMeta::new("a.csv", 1, "")]);

        let links = compute_links(&reg);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].from, Vec2::new(225.0, 450.0));
        assert_eq!(links[0].to, Vec2::new(175.0, 480.0));

        reg.move_panel(&ids[0], Vec2::new(1000.0, 1000.0));
        let moved = compute_links(&reg);
        let link = moved.iter().find(|l| l.insight_id == ids[0]).unwrap();
        assert_eq!(link.to, Vec2::new(1175.0, 1000.0));
    }

    #[test]
    fn test_screen_segment_stays_on_panels_when_zoomed() {
        let mut reg = PanelRegistry::default();
        let src = reg.create_panel(PanelKind::FileUpload, Vec2::new(100.0, 100.0));
        reg.request_insights(&src, &[FileMeta::new("a.csv", 1, "")]);
        let mut vp = Viewport::default();
        vp.set_container(Vec2::ZERO, Vec2::new(1280.0, 720.0));
        vp.set_scroll(Vec2::ZERO);
        vp.set_zoom(2.0);

        let link = &compute_links(&reg)[0];
        let (from, to) = link.screen_segment(&reg, &vp).unwrap();
        assert_eq!(from, Vec2::new(425.0, 650.0));
        assert_eq!(to, Vec2::new(375.0, 1160.0));
    }

    #[test]
    fn test_no_links_without_insights() {
        let mut reg = PanelRegistry::default();
        reg.create_panel(PanelKind::FileUpload, Vec2::ZERO);
        reg.create_panel(PanelKind::Chat, Vec2::ZERO);
        reg.create_panel(PanelKind::Insight, Vec2::ZERO);
        assert!(compute_links(&reg).is_empty());
    }

    #[test]
    fn test_dangling_source_omitted() {
        let mut reg = PanelRegistry::default();
        reg.panels.push(Panel {
            id: "orphan".into(),
            position: Vec2::ZERO,
            size: PanelKind::Insight.size(),
            z_index: 99,
            source_panel_id: Some("gone".into()),
            payload: PanelPayload::Insight { text: String::new() },
        });
        assert!(compute_links(&reg).is_empty());
    }

    #[test]
    fn test_links_cleared_by_cascade() {
        let mut reg = PanelRegistry::default();
        let src = reg.create_panel(PanelKind::FileUpload, Vec2::ZERO);
        reg.request_insights(&src, &[FileMeta::new("a.csv", 1, "")]);
        reg.remove_panel(&src);
        assert!(compute_links(&reg).is_empty());
    }
}
