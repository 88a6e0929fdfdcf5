//! Render module - Canvas rasterization and glyph drawing.

mod canvas;
mod glyph;
mod text;

pub use canvas::*;
pub use glyph::*;
pub use text::*;
