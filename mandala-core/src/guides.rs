//! # Guides
//!
//! The transient overlay: dashed "slice" grid lines and faint mirror-axis
//! lines, radiating from the surface center out past the farthest corner.
//! Guides are rebuilt wholesale whenever slice count, brightness, or a toggle
//! changes, and are never part of a history snapshot. The overlay tracks its
//! own item IDs so it can be lifted out of the scene without touching
//! content; removal of an already-gone item is a no-op by scene contract.

use crate::color::Rgba8;
use crate::geometry::{Point, Segment};
use crate::scene::{Line, LineStyle, Primitive, Scene};

const SLICE_GUIDE_WIDTH: f32 = 3.0;
const MIRROR_GUIDE_WIDTH: f32 = 1.0;
const MIRROR_GUIDE_ALPHA: u8 = 80;

/// The geometric center of a surface - also the stroke rotation center,
/// always derived from the current size, never cached.
#[must_use]
pub fn surface_center(width: u32, height: u32) -> Point {
    Point::new(width as f32 / 2.0, height as f32 / 2.0)
}

/// Center-to-farthest-corner distance; guide lines are this long so they
/// always leave the surface.
fn guide_length(width: u32, height: u32) -> f32 {
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;
    (half_w * half_w + half_h * half_h).sqrt()
}

/// A ray from `center` at `angle_degrees`, counterclockwise with y down
/// (screen coordinates).
fn radial_segment(center: Point, length: f32, angle_degrees: f32) -> Segment {
    let radians = angle_degrees.to_radians();
    Segment::new(
        center,
        Point::new(
            center.x + length * radians.cos(),
            center.y - length * radians.sin(),
        ),
    )
}

/// Owner of both guide families' scene identities.
#[derive(Default)]
pub struct GuideOverlay {
    slice_ids: Vec<crate::scene::ItemId>,
    mirror_ids: Vec<crate::scene::ItemId>,
}
impl GuideOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Lift both families out of the scene.
    pub fn remove_all(&mut self, scene: &mut Scene) {
        self.remove_slices(scene);
        self.remove_mirrors(scene);
    }
    pub fn remove_slices(&mut self, scene: &mut Scene) {
        scene.remove_all(&self.slice_ids);
        self.slice_ids.clear();
    }
    pub fn remove_mirrors(&mut self, scene: &mut Scene) {
        scene.remove_all(&self.mirror_ids);
        self.mirror_ids.clear();
    }
    /// Clear and regenerate the angular grid: `slices` dashed rays at
    /// `i * 360 / slices` degrees, alpha taken from the brightness setting.
    /// Zero slices clears and draws nothing.
    pub fn rebuild_slices(
        &mut self,
        scene: &mut Scene,
        slices: u32,
        alpha: u8,
        width: u32,
        height: u32,
    ) {
        self.remove_slices(scene);
        if slices == 0 {
            return;
        }
        let center = surface_center(width, height);
        let length = guide_length(width, height);
        for i in 1..=slices {
            let angle = i as f32 * 360.0 / slices as f32;
            let id = scene.insert(Primitive::Line(Line {
                segment: radial_segment(center, length, angle),
                width: SLICE_GUIDE_WIDTH,
                color: Rgba8::new(0, 0, 0, alpha),
                style: LineStyle::Dashed,
            }));
            self.slice_ids.push(id);
        }
    }
    /// Clear and regenerate the mirror axes: solid faint rays offset half a
    /// slice from the grid, `i * 360 / slices + 180 / slices` degrees.
    pub fn rebuild_mirrors(&mut self, scene: &mut Scene, slices: u32, width: u32, height: u32) {
        self.remove_mirrors(scene);
        if slices == 0 {
            return;
        }
        let center = surface_center(width, height);
        let length = guide_length(width, height);
        let half_slice = 180.0 / slices as f32;
        for i in 1..=slices {
            let angle = i as f32 * 360.0 / slices as f32 + half_slice;
            let id = scene.insert(Primitive::Line(Line {
                segment: radial_segment(center, length, angle),
                width: MIRROR_GUIDE_WIDTH,
                color: Rgba8::new(0, 0, 0, MIRROR_GUIDE_ALPHA),
                style: LineStyle::Solid,
            }));
            self.mirror_ids.push(id);
        }
    }
    /// How many guide primitives the overlay currently owns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slice_ids.len() + self.mirror_ids.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slice_ids.is_empty() && self.mirror_ids.is_empty()
    }
}
