//! Factory functions for creating test data.
//!
//! File metadata sets and pre-populated boards used by the unit and
//! integration tests and by scripted agents.

use glam::Vec2;
use shared::FileMeta;

use crate::harness::TestHarness;
use crate::state::PanelId;

// ── File factories ──────────────────────────────────────────────

/// CSV file of the given size in bytes
pub fn csv_file(name: &str, size: u64) -> FileMeta {
    FileMeta::new(name, size, "text/csv")
}

/// PNG image
pub fn png_file(name: &str) -> FileMeta {
    FileMeta::new(name, 4096, "image/png")
}

/// A file whose type is not accepted for upload
pub fn unsupported_file(name: &str) -> FileMeta {
    FileMeta::new(name, 100, "application/x-msdownload")
}

/// Typical spreadsheet + report pair
pub fn sample_files() -> Vec<FileMeta> {
    vec![
        csv_file("sales_q3.csv", 2048),
        FileMeta::new("report.pdf", 153_600, ""),
    ]
}

/// `n` distinct CSV files named `file_0.csv`, `file_1.csv`, ...
pub fn numbered_files(n: usize) -> Vec<FileMeta> {
    (0..n)
        .map(|i| csv_file(&format!("file_{i}.csv"), 1024 * (i as u64 + 1)))
        .collect()
}

// ── Board factories ─────────────────────────────────────────────

/// Harness with one upload panel at `pos` holding `sample_files()`
pub fn board_with_upload(pos: Vec2) -> (TestHarness, PanelId) {
    let mut h = TestHarness::new();
    let id = h.create_upload(pos.x, pos.y);
    h.add_files(&id, sample_files());
    (h, id)
}

/// Upload panel with files and its full set of insights
pub fn board_with_insights() -> (TestHarness, PanelId, Vec<PanelId>) {
    let (mut h, id) = board_with_upload(Vec2::new(100.0, 100.0));
    let insights = h.get_insights(&id);
    (h, id, insights)
}
