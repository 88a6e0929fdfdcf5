//! Animated GIF output for composed frame sequences.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageResult, Rgba, RgbaImage};

use crate::render::Canvas;

/// Streams grayscale frames into an infinitely looping GIF file.
///
/// Usage:
/// ```ignore
/// let mut recorder = GifRecorder::new("puzzle.gif", 250)?;
/// for frame in &frames {
///     recorder.record_frame(frame)?;
/// }
/// let stats = recorder.finalize();
/// ```
pub struct GifRecorder {
    encoder: GifEncoder<BufWriter<File>>,
    delay: Delay,
    frames_written: u64,
}

impl GifRecorder {
    /// Create the output file and write the loop header.
    pub fn new<P: AsRef<Path>>(path: P, frame_duration_ms: u32) -> ImageResult<Self> {
        let file = File::create(path)?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder.set_repeat(Repeat::Infinite)?;
        Ok(Self {
            encoder,
            delay: Delay::from_numer_denom_ms(frame_duration_ms, 1),
            frames_written: 0,
        })
    }

    /// Append one frame with the configured display duration.
    pub fn record_frame(&mut self, canvas: &Canvas) -> ImageResult<()> {
        let rgba = RgbaImage::from_fn(canvas.width(), canvas.height(), |x, y| {
            let v = canvas.pixel(i64::from(x), i64::from(y)).unwrap_or(0);
            Rgba([v, v, v, 255])
        });
        self.encoder
            .encode_frame(Frame::from_parts(rgba, 0, 0, self.delay))?;
        self.frames_written += 1;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Finish the file and report what was written.
    pub fn finalize(self) -> GifStats {
        GifStats {
            frame_count: self.frames_written,
        }
    }
}

/// Statistics from a recording session.
#[derive(Debug, Clone, Copy)]
pub struct GifStats {
    /// Total frames written.
    pub frame_count: u64,
}

impl std::fmt::Display for GifStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} frames", self.frame_count)
    }
}
