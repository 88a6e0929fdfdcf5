//! Gyroglyph - Encode alphabet-constrained messages as animated glyphs.
//!
//! A message drawn from a fixed 32-symbol alphabet is packed at 5 bits
//! per symbol, the flat bit stream is re-read at 8 bits per byte, and
//! each resulting byte becomes one animation frame: its set bits select
//! vertices on a circle, connected in bit-index order into a dot, line,
//! or filled polygon. Every frame rotates the vertex slots a little
//! further, with the total rotation capped at the 45-degree slot
//! spacing.
//!
//! # Architecture
//!
//! - `schema`: configuration and the fixed input alphabet
//! - `compute`: pure transforms (bit re-packing, circle geometry)
//! - `render`: grayscale canvas, bitmap text, glyph drawing
//! - `animation`: frame composition and GIF container output
//!
//! # Example
//!
//! ```rust,no_run
//! use gyroglyph::{
//!     animation::{Composer, GifRecorder},
//!     schema::PuzzleConfig,
//! };
//!
//! let config = PuzzleConfig::default();
//! let composer = Composer::new(config.clone()).unwrap();
//! let frames = composer.compose("HELLO{A}").unwrap();
//!
//! let mut recorder = GifRecorder::new("puzzle.gif", config.frame_duration_ms).unwrap();
//! for frame in &frames {
//!     recorder.record_frame(frame).unwrap();
//! }
//! println!("{}", recorder.finalize());
//! ```

pub mod animation;
pub mod compute;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use animation::{ComposeError, Composer, GifRecorder, GifStats};
pub use render::Canvas;
pub use schema::{Alphabet, PuzzleConfig, ALPHABET};
