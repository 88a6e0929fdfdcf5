//! Animation module - Frame composition and GIF container output.
//!
//! `Composer` turns a validated input string into an ordered sequence of
//! independent grayscale frames; `GifRecorder` serializes such a sequence
//! into an infinitely looping animated GIF with a fixed per-frame delay.

mod composer;
mod recorder;

pub use composer::{rotation_multiplier, ComposeError, Composer};
pub use recorder::{GifRecorder, GifStats};
