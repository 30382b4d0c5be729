//! # Geometry
//!
//! Pure 2D transforms used to replicate a drawn segment around the canvas
//! center. There is exactly one rotation implementation here - the legacy
//! program carried two mathematically-equivalent copies, which is an
//! invitation for drift.

/// A position on the drawing surface, y growing downward.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}
impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

/// One drawn line segment, start to end.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}
impl Segment {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
    #[must_use]
    pub fn length(&self) -> f32 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Rotate `point` about `center` by `angle` radians.
///
/// Composed as translate(-center) → rotate(angle) → translate(+center).
#[must_use]
pub fn rotate(center: Point, point: Point, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    // Relative to the rotation center.
    let xr = point.x - center.x;
    let yr = point.y - center.y;
    Point {
        x: xr * cos - yr * sin + center.x,
        y: xr * sin + yr * cos + center.y,
    }
}

/// Rotate both endpoints of `segment` about `center` by `angle_degrees`.
#[must_use]
pub fn rotate_segment(center: Point, segment: Segment, angle_degrees: f32) -> Segment {
    let radians = angle_degrees.to_radians();
    Segment {
        start: rotate(center, segment.start, radians),
        end: rotate(center, segment.end, radians),
    }
}

/// Reflect `segment` through `center`.
///
/// This is a *point* reflection (a half-turn about the center), not an axis
/// mirror. Mirror mode depends on exactly this semantic.
#[must_use]
pub fn mirror(center: Point, segment: Segment) -> Segment {
    rotate_segment(center, segment, 180.0)
}
