//! Byte-to-primitive glyph rendering.
//!
//! Each byte selects up to 8 points on the bounding circle, one per set
//! bit (MSB first). The point count picks the primitive: nothing, a dot,
//! a line, or a filled polygon in bit-index order.

use crate::compute::{CircleMapper, SLOT_ANGLES};

use super::Canvas;

/// Renders one byte per call onto a canvas.
#[derive(Debug, Clone, Copy)]
pub struct GlyphRenderer {
    mapper: CircleMapper,
    dot_radius: f32,
    stroke_width: f32,
    shade: u8,
}

impl GlyphRenderer {
    pub fn new(mapper: CircleMapper, dot_radius: f32, stroke_width: f32, shade: u8) -> Self {
        Self {
            mapper,
            dot_radius,
            stroke_width,
            shade,
        }
    }

    /// Circle points selected by the set bits of `byte`, in bit-index
    /// order (bit 7 first), each rotated by `rotation_offset` degrees.
    ///
    /// The ordering is normative: polygon vertices are connected in this
    /// order, which is what makes multi-bit bytes render as irregular,
    /// possibly self-intersecting shapes. Do not sort.
    pub fn points(&self, byte: u8, rotation_offset: f32) -> Vec<(f32, f32)> {
        (0..8usize)
            .filter(|&i| byte & (0x80u8 >> i) != 0)
            .map(|i| self.mapper.point_for_angle(SLOT_ANGLES[i] - rotation_offset))
            .collect()
    }

    /// Draw the glyph for `byte` at the given rotation.
    pub fn draw(&self, canvas: &mut Canvas, byte: u8, rotation_offset: f32) {
        let points = self.points(byte, rotation_offset);
        match points.as_slice() {
            [] => {}
            [p] => canvas.fill_disc(p.0, p.1, self.dot_radius, self.shade),
            [a, b] => canvas.stroke_line(*a, *b, self.stroke_width, self.shade),
            _ => canvas.fill_polygon(&points, self.shade),
        }
    }

    /// Draw `byte` for the frame at `frame_index`, preceded by any
    /// trailing `previous` bytes (oldest first).
    ///
    /// Overlay `j` is drawn at rotation index `frame_index - (len - j)`,
    /// i.e. at the rotation it had on its own frame, so history layers
    /// under the newest glyph at progressively smaller rotations. The
    /// index may go negative when more overlays are passed than frames
    /// precede this one; the rotation simply runs backwards.
    pub fn draw_layered(
        &self,
        canvas: &mut Canvas,
        frame_index: usize,
        rotation_multiplier: f32,
        byte: u8,
        previous: &[u8],
    ) {
        for (j, &prev) in previous.iter().enumerate() {
            let rotation_index = frame_index as i64 - (previous.len() - j) as i64;
            self.draw(canvas, prev, rotation_index as f32 * rotation_multiplier);
        }
        self.draw(canvas, byte, frame_index as f32 * rotation_multiplier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> GlyphRenderer {
        GlyphRenderer::new(CircleMapper::new((640.0, 360.0), 320.0), 3.0, 3.0, 255)
    }

    fn canvas() -> Canvas {
        Canvas::new(1280, 720, 0)
    }

    #[test]
    fn test_point_count_per_byte() {
        let r = renderer();
        assert_eq!(r.points(0x00, 0.0).len(), 0);
        assert_eq!(r.points(0x80, 0.0).len(), 1);
        assert_eq!(r.points(0xC0, 0.0).len(), 2);
        assert_eq!(r.points(0xFF, 0.0).len(), 8);
    }

    #[test]
    fn test_msb_selects_slot_zero() {
        let r = renderer();
        let expected = CircleMapper::new((640.0, 360.0), 320.0).point_for_angle(SLOT_ANGLES[0]);
        assert_eq!(r.points(0x80, 0.0), vec![expected]);
    }

    #[test]
    fn test_bit_index_order_preserved() {
        // 0b10100000 selects slots 0 and 2, in that order, even though
        // slot 2 sorts first by angle magnitude.
        let r = renderer();
        let m = CircleMapper::new((640.0, 360.0), 320.0);
        let points = r.points(0b1010_0000, 0.0);
        assert_eq!(
            points,
            vec![
                m.point_for_angle(SLOT_ANGLES[0]),
                m.point_for_angle(SLOT_ANGLES[2]),
            ]
        );
    }

    #[test]
    fn test_rotation_shifts_points() {
        let r = renderer();
        assert_ne!(r.points(0x80, 0.0), r.points(0x80, 9.0));
    }

    #[test]
    fn test_zero_byte_draws_nothing() {
        let r = renderer();
        let mut c = canvas();
        r.draw(&mut c, 0x00, 0.0);
        assert_eq!(c.count_shade(255), 0);
    }

    #[test]
    fn test_single_bit_draws_dot() {
        let r = renderer();
        let mut c = canvas();
        r.draw(&mut c, 0x80, 0.0);
        let coverage = c.count_shade(255);
        // A radius-3 dot, not a polygon: small but present.
        assert!(coverage > 0 && coverage < 100);
    }

    #[test]
    fn test_full_byte_draws_polygon() {
        let r = renderer();
        let mut c = canvas();
        r.draw(&mut c, 0xFF, 0.0);
        // An octagon spanning the bounding circle dwarfs any dot or line.
        assert!(c.count_shade(255) > 10_000);
    }

    #[test]
    fn test_layered_draw_adds_history() {
        let r = renderer();
        let mut plain = canvas();
        let mut layered = canvas();
        r.draw_layered(&mut plain, 3, 9.0, 0x80, &[]);
        r.draw_layered(&mut layered, 3, 9.0, 0x80, &[0xC0, 0x80]);
        assert!(layered.count_shade(255) > plain.count_shade(255));
    }

    #[test]
    fn test_layered_overlay_matches_own_frame_rotation() {
        // The overlay for the byte two frames back lands exactly where a
        // plain draw at that frame's rotation would.
        let r = renderer();
        let mut via_overlay = canvas();
        let mut direct = canvas();
        r.draw_layered(&mut via_overlay, 5, 9.0, 0x00, &[0xC0]);
        r.draw(&mut direct, 0xC0, 4.0 * 9.0);
        assert_eq!(via_overlay.data(), direct.data());
    }
}
