//! Frame composition: input string to ordered frame sequence.

use log::debug;

use crate::compute::{pack_bits, unpack_bits, CircleMapper, SLOT_SPACING};
use crate::render::{draw_text, Canvas, GlyphRenderer};
use crate::schema::{Alphabet, ConfigError, PuzzleConfig, ALPHABET, SYMBOL_BITS};

/// Bit width of the re-packed output units.
const BYTE_BITS: u32 = 8;

/// Integer scale applied to the 8x8 font (32 px glyphs).
const TEXT_SCALE: u32 = 4;

/// Input length must be a multiple of this many characters.
const LENGTH_QUANTUM: usize = 8;

/// Errors surfaced while composing an animation.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("Input must be non-empty and its length a multiple of 8 (got {length} characters)")]
    InvalidInputLength { length: usize },
    #[error("Input characters must be one of {}; found {character:?}", ALPHABET)]
    UnknownCharacter { character: char },
    #[error("Bit re-pack round trip failed to reproduce the input symbols; this is a defect")]
    InternalConsistency,
}

/// Per-animation rotation step in degrees.
///
/// Total rotation across the animation is capped at one slot spacing
/// (45 degrees), so a rotated slot can never be mistaken for its
/// neighbor.
pub fn rotation_multiplier(byte_count: usize) -> f32 {
    SLOT_SPACING / byte_count as f32
}

/// Drives the full pipeline: validate, translate, re-pack, render.
///
/// Holds the shared background template (legend text baked in); every
/// frame starts as an independent clone of it.
pub struct Composer {
    config: PuzzleConfig,
    alphabet: Alphabet,
    background: Canvas,
}

impl Composer {
    /// Build a composer, validating the configuration and baking the
    /// legend into the background template.
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut background = Canvas::new(config.width, config.height, 0);
        draw_text(
            &mut background,
            &format!("FLAG ALPHABET: {}", ALPHABET),
            i64::from(config.legend_x),
            i64::from(config.height) - 40,
            TEXT_SCALE,
            config.hidden_shade,
        );
        Ok(Self {
            config,
            alphabet: Alphabet::standard(),
            background,
        })
    }

    /// Replace the background template, e.g. with externally rendered
    /// legend art. The canvas should match the configured dimensions.
    pub fn with_background(mut self, background: Canvas) -> Self {
        self.background = background;
        self
    }

    /// Validate `input` and run the 5-to-8 bit re-pack, yielding one
    /// byte per output frame.
    pub fn encode(&self, input: &str) -> Result<Vec<u8>, ComposeError> {
        let length = input.chars().count();
        if length == 0 || length % LENGTH_QUANTUM != 0 {
            return Err(ComposeError::InvalidInputLength { length });
        }

        let mut symbols = Vec::with_capacity(length);
        for character in input.chars() {
            match self.alphabet.index_of(character) {
                Some(index) => symbols.push(u32::from(index)),
                None => return Err(ComposeError::UnknownCharacter { character }),
            }
        }

        let bits = pack_bits(&symbols, SYMBOL_BITS);
        let bytes = unpack_bits(&bits, BYTE_BITS);

        // Re-reading the stream at the original width must reproduce the
        // symbols exactly; anything else means the packer is broken.
        if unpack_bits(&bits, SYMBOL_BITS) != symbols {
            return Err(ComposeError::InternalConsistency);
        }

        debug!(
            "encoded {} symbols into {} bits, {} bytes",
            symbols.len(),
            bits.len(),
            bytes.len()
        );
        Ok(bytes.into_iter().map(|b| b as u8).collect())
    }

    /// Compose the full animation: one frame per re-packed byte.
    ///
    /// All validation happens before the first frame is rendered.
    pub fn compose(&self, input: &str) -> Result<Vec<Canvas>, ComposeError> {
        let bytes = self.encode(input)?;
        let multiplier = rotation_multiplier(bytes.len());
        let renderer = GlyphRenderer::new(
            CircleMapper::new(self.config.center(), self.config.circle_radius),
            self.config.dot_radius,
            self.config.stroke_width,
            self.config.visible_shade,
        );

        let mut frames = Vec::with_capacity(bytes.len());
        for (index, &byte) in bytes.iter().enumerate() {
            let mut frame = self.background.clone();
            if self.config.debug {
                self.draw_debug_overlay(&mut frame, index, byte);
            }
            let trail_start = index.saturating_sub(self.config.trail);
            renderer.draw_layered(&mut frame, index, multiplier, byte, &bytes[trail_start..index]);
            frames.push(frame);
        }

        debug!(
            "composed {} frames, rotation step {:.3} degrees",
            frames.len(),
            multiplier
        );
        Ok(frames)
    }

    /// Bounding circle, frame index, and byte bits, drawn faintly.
    fn draw_debug_overlay(&self, frame: &mut Canvas, index: usize, byte: u8) {
        let shade = self.config.debug_shade;
        frame.stroke_circle(self.config.center(), self.config.circle_radius, 2.0, shade);
        draw_text(frame, &index.to_string(), 90, 0, TEXT_SCALE, shade);
        draw_text(frame, &format!("{byte:08b}"), 180, 0, TEXT_SCALE, shade);
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }
}
