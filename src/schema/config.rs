//! Configuration types for puzzle rendering parameters.

use serde::{Deserialize, Serialize};

/// Default number of trailing previous-byte overlays per frame.
fn default_trail() -> usize {
    0
}

/// Top-level puzzle configuration.
///
/// The defaults reproduce the reference puzzle exactly; every value is a
/// plain constant so a solver-side reimplementation can match it
/// bit-for-bit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Radius of the bounding circle the glyph vertices lie on.
    pub circle_radius: f32,
    /// Radius of the dot drawn for single-point glyphs.
    pub dot_radius: f32,
    /// Stroke width of the line drawn for two-point glyphs.
    pub stroke_width: f32,
    /// Grayscale intensity of drawn glyphs.
    pub visible_shade: u8,
    /// Grayscale intensity of the baked-in legend text.
    pub hidden_shade: u8,
    /// Grayscale intensity of debug overlay drawing.
    pub debug_shade: u8,
    /// X position of the legend text on the background template.
    pub legend_x: u32,
    /// Per-frame display duration in milliseconds.
    pub frame_duration_ms: u32,
    /// Number of trailing previous bytes layered into each frame.
    #[serde(default = "default_trail")]
    pub trail: usize,
    /// Draw the debug overlay (bounding circle, frame index, byte bits).
    #[serde(default)]
    pub debug: bool,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            circle_radius: 320.0,
            dot_radius: 3.0,
            stroke_width: 3.0,
            visible_shade: 255,
            hidden_shade: 1,
            debug_shade: 127,
            legend_x: 167,
            frame_duration_ms: 250,
            trail: 0,
            debug: false,
        }
    }
}

impl PuzzleConfig {
    /// Center of the bounding circle (canvas center).
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.circle_radius <= 0.0 {
            return Err(ConfigError::InvalidRadius);
        }
        if self.circle_radius * 2.0 > self.width.min(self.height) as f32 {
            return Err(ConfigError::CircleExceedsCanvas);
        }
        if self.frame_duration_ms == 0 {
            return Err(ConfigError::InvalidFrameDuration);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Canvas dimensions must be non-zero")]
    InvalidDimensions,
    #[error("Circle radius must be positive")]
    InvalidRadius,
    #[error("Bounding circle does not fit inside the canvas")]
    CircleExceedsCanvas,
    #[error("Frame duration must be non-zero")]
    InvalidFrameDuration,
}
