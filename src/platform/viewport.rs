//! Responsive playfield sizing
//!
//! The playfield keeps its aspect ratio and never grows past the tuning size.
//! The page keeps an 8px margin at the sides and 16px above and below.

use crate::tuning::Tuning;

const HORIZONTAL_MARGIN: f32 = 16.0;
const VERTICAL_MARGIN: f32 = 32.0;

/// CSS size of the playfield and its scale relative to game units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    /// CSS pixels per game unit
    pub scale: f32,
}

impl Viewport {
    /// Fit the playfield into a window of the given CSS size
    pub fn fit(tuning: &Tuning, window_width: f32, window_height: f32) -> Self {
        let max_w = (window_width - HORIZONTAL_MARGIN).min(tuning.viewport_width);
        let max_h = (window_height - VERTICAL_MARGIN).min(tuning.viewport_height);

        let scale = (max_w / tuning.viewport_width)
            .min(max_h / tuning.viewport_height)
            .max(0.0);

        Self {
            css_width: tuning.viewport_width * scale,
            css_height: tuning.viewport_height * scale,
            scale,
        }
    }

    /// Backing-store size in device pixels
    pub fn physical_size(&self, device_pixel_ratio: f64) -> (u32, u32) {
        let w = (self.css_width as f64 * device_pixel_ratio).round().max(1.0) as u32;
        let h = (self.css_height as f64 * device_pixel_ratio).round().max(1.0) as u32;
        (w, h)
    }
}
