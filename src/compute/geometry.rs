//! Angular slot geometry on the bounding circle.

/// Base angle, in degrees, for each of the 8 bit slots (bit 7 first).
///
/// Deliberately asymmetric: the cardinal 0°/180° axis is excluded so no
/// vertex lands level with the legend text at the bottom of the canvas,
/// and the last slot wraps to -157.5 instead of continuing past 180.
/// The exact values and ordering are part of the puzzle's visual
/// signature; reorderings decode to different messages.
pub const SLOT_ANGLES: [f32; 8] = [
    -112.5, -67.5, -22.5, 22.5, 67.5, 112.5, 157.5, -157.5,
];

/// Angular spacing between adjacent slots.
pub const SLOT_SPACING: f32 = 45.0;

/// Maps angles to points on a fixed circle.
#[derive(Debug, Clone, Copy)]
pub struct CircleMapper {
    center: (f32, f32),
    radius: f32,
}

impl CircleMapper {
    pub fn new(center: (f32, f32), radius: f32) -> Self {
        Self { center, radius }
    }

    /// Point on the circle at `degrees`, y-down canvas coordinates.
    #[inline]
    pub fn point_for_angle(&self, degrees: f32) -> (f32, f32) {
        let radians = degrees.to_radians();
        (
            radians.cos() * self.radius + self.center.0,
            radians.sin() * self.radius + self.center.1,
        )
    }

    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}
