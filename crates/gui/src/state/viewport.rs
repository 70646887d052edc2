//! Viewport: maps between screen pixels and canvas space
//!
//! Pan is the scroll offset of the canvas container, in screen pixels.
//! Zoom scales the canvas layer around the canvas origin. Panel positions and
//! sizes are stored in canvas units and never change with zoom; panel
//! *content* is drawn unscaled, so only the panel's position on the canvas
//! follows the zoom.

use glam::Vec2;

pub const MIN_ZOOM: f32 = 0.2;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.1;

/// Width and height of the scrollable canvas at zoom 1.0
pub const CANVAS_EXTENT: f32 = 100_000.0;

/// Grid cell size in canvas units
pub const GRID_SPACING: f32 = 50.0;

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub min: Vec2,
    pub size: Vec2,
}

impl ScreenRect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.y >= self.min.y && p.x < max.x && p.y < max.y
    }
}

/// Scroll offset, container geometry and zoom level
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f32,
    scroll: Vec2,
    /// Top-left of the canvas container on screen
    origin: Vec2,
    /// Visible size of the canvas container
    size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            scroll: Vec2::ZERO,
            origin: Vec2::ZERO,
            size: Vec2::new(1280.0, 720.0),
        }
    }
}

/// Snap to one decimal so repeated steps never drift
fn snap_zoom(z: f32) -> f32 {
    ((z * 10.0).round() / 10.0).clamp(MIN_ZOOM, MAX_ZOOM)
}

impl Viewport {
    pub fn zoom_level(&self) -> f32 {
        self.zoom
    }

    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Update the container's on-screen rectangle (called every frame by the UI)
    pub fn set_container(&mut self, origin: Vec2, size: Vec2) {
        self.origin = origin;
        self.size = size.max(Vec2::ONE);
        self.scroll = self.clamp_scroll(self.scroll);
    }

    /// Largest scroll offset the container allows at the current zoom
    pub fn max_scroll(&self) -> Vec2 {
        (Vec2::splat(CANVAS_EXTENT * self.zoom) - self.size).max(Vec2::ZERO)
    }

    fn clamp_scroll(&self, scroll: Vec2) -> Vec2 {
        scroll.clamp(Vec2::ZERO, self.max_scroll())
    }

    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = self.clamp_scroll(scroll);
    }

    /// Scroll by a delta in screen pixels (positive moves the view right/down)
    pub fn pan_by(&mut self, delta: Vec2) {
        self.set_scroll(self.scroll + delta);
    }

    /// Scroll to the middle of the canvas
    pub fn center_scroll(&mut self) {
        self.scroll = (self.max_scroll() / 2.0).round();
    }

    /// Set the zoom level, snapped to the step grid and clamped
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = snap_zoom(zoom);
        self.scroll = self.clamp_scroll(self.scroll);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.set_zoom(1.0);
    }

    /// Apply a wheel gesture. `delta` uses browser conventions: positive y
    /// scrolls down. With the zoom modifier held, scrolling up zooms in and
    /// anything else zooms out; without it the canvas scrolls.
    ///
    /// Returns true if the zoom level changed.
    pub fn apply_wheel(&mut self, delta: Vec2, zoom_modifier: bool) -> bool {
        if zoom_modifier {
            let before = self.zoom;
            if delta.y < 0.0 {
                self.zoom_in();
            } else {
                self.zoom_out();
            }
            return before != self.zoom;
        }
        self.pan_by(delta);
        false
    }

    /// Screen point to canvas space: `screen - origin + scroll`.
    ///
    /// Every screen event with a canvas-space effect goes through here.
    pub fn screen_to_canvas(&self, screen: Vec2) -> Vec2 {
        screen - self.origin + self.scroll
    }

    /// Inverse of `screen_to_canvas`; used for the (unscaled) context menu
    pub fn canvas_to_screen_unscaled(&self, canvas: Vec2) -> Vec2 {
        canvas + self.origin - self.scroll
    }

    /// Where a canvas point lands on screen inside the zoomed canvas layer
    pub fn canvas_to_screen_scaled(&self, canvas: Vec2) -> Vec2 {
        self.origin + canvas * self.zoom - self.scroll
    }

    /// On-screen rectangle of a panel: position follows the zoom, size does not
    pub fn panel_screen_rect(&self, position: Vec2, size: Vec2) -> ScreenRect {
        ScreenRect::new(self.canvas_to_screen_scaled(position), size)
    }

    /// Grid cell size in screen pixels
    pub fn grid_cell_px(&self) -> f32 {
        GRID_SPACING * self.zoom
    }
}
