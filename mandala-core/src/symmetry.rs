//! # Symmetry
//!
//! The stroke fan-out planner. One drawn segment goes in; the full set of
//! rendered copies comes out: the primary, its optional point-mirror, and for
//! mandala mode the `slices - 1` rotational copies (each with an optional
//! mirror of its own), hue-cycled in rainbow mode. Pure - the canvas decides
//! what to do with the plan.

use crate::color::{self, Hsv, Rgba8};
use crate::geometry::{self, Point, Segment};

/// Immutable per-event stroke configuration, captured by the canvas at the
/// moment a segment arrives. No live coupling to any widget state.
#[derive(Copy, Clone, Debug)]
pub struct StrokeSettings {
    pub width: f32,
    pub color: Rgba8,
    /// Rotational copy count. 0 disables replication entirely.
    pub slices: u32,
    /// Cycle each rotational copy's hue one slice-step further.
    pub rainbow: bool,
    /// Add a point-reflection of every copy through the center.
    pub mirror: bool,
}

/// One line the renderer should insert.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PlannedLine {
    pub segment: Segment,
    pub color: Rgba8,
}

/// Expand one segment into every copy to draw, in paint order: primary,
/// primary's mirror, then each rotation followed by its mirror.
///
/// Rainbow chains: each copy's color seeds the next hue step, starting from
/// the pen color, so the copies of one stroke sweep the wheel together.
#[must_use]
pub fn plan_segment(
    segment: Segment,
    center: Point,
    settings: &StrokeSettings,
) -> smallvec::SmallVec<[PlannedLine; 8]> {
    let mut plan = smallvec::SmallVec::new();
    plan.push(PlannedLine {
        segment,
        color: settings.color,
    });
    if settings.mirror {
        plan.push(PlannedLine {
            segment: geometry::mirror(center, segment),
            color: settings.color,
        });
    }
    if settings.slices == 0 {
        return plan;
    }

    let mut hsv = Hsv::from_rgb(settings.color);
    for i in 1..settings.slices {
        let angle = i as f32 * 360.0 / settings.slices as f32;
        let rotated = geometry::rotate_segment(center, segment, angle);
        let copy_color = if settings.rainbow {
            hsv = color::next_hue(hsv, settings.slices);
            hsv.to_rgba(settings.color.a)
        } else {
            settings.color
        };
        plan.push(PlannedLine {
            segment: rotated,
            color: copy_color,
        });
        if settings.mirror {
            plan.push(PlannedLine {
                segment: geometry::mirror(center, rotated),
                color: copy_color,
            });
        }
    }
    plan
}

#[cfg(test)]
mod test {
    use super::{plan_segment, StrokeSettings};
    use crate::color::Rgba8;
    use crate::geometry::{Point, Segment};

    fn settings(slices: u32, rainbow: bool, mirror: bool) -> StrokeSettings {
        StrokeSettings {
            width: 2.0,
            color: Rgba8::new(255, 0, 0, 255),
            slices,
            rainbow,
            mirror,
        }
    }
    fn segment() -> Segment {
        Segment::new(Point::new(10.0, 10.0), Point::new(20.0, 20.0))
    }
    const CENTER: Point = Point::new(50.0, 50.0);

    #[test]
    fn four_slices_four_lines() {
        let plan = plan_segment(segment(), CENTER, &settings(4, false, false));
        assert_eq!(plan.len(), 4);
    }
    #[test]
    fn mirror_doubles_everything() {
        let plan = plan_segment(segment(), CENTER, &settings(4, false, true));
        assert_eq!(plan.len(), 8);
    }
    #[test]
    fn no_slices_just_primary() {
        assert_eq!(plan_segment(segment(), CENTER, &settings(0, false, false)).len(), 1);
        assert_eq!(plan_segment(segment(), CENTER, &settings(0, false, true)).len(), 2);
    }
    #[test]
    fn six_slices_sixty_degrees_same_color() {
        // 100x100 canvas scenario: 6 copies, uniform color, 60° spacing.
        let plan = plan_segment(segment(), CENTER, &settings(6, false, false));
        assert_eq!(plan.len(), 6);
        assert!(plan.iter().all(|line| line.color == Rgba8::new(255, 0, 0, 255)));
        // Every copy's start stays equidistant from the center...
        let radius = |p: Point| ((p.x - 50.0).powi(2) + (p.y - 50.0).powi(2)).sqrt();
        for line in &plan {
            assert!((radius(line.segment.start) - radius(segment().start)).abs() < 1e-3);
        }
        // ...and consecutive copies subtend 60°.
        let angle_of = |p: Point| (p.y - 50.0).atan2(p.x - 50.0);
        for pair in plan.windows(2) {
            let delta = (angle_of(pair[1].segment.start) - angle_of(pair[0].segment.start))
                .rem_euclid(std::f32::consts::TAU);
            assert!((delta - std::f32::consts::FRAC_PI_3).abs() < 1e-3);
        }
    }
    #[test]
    fn rainbow_cycles_from_pen_color() {
        // Red pen, 3 slices: copies land exactly on green then blue.
        let plan = plan_segment(segment(), CENTER, &settings(3, true, false));
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].color, Rgba8::new(255, 0, 0, 255));
        assert_eq!(plan[1].color, Rgba8::new(0, 255, 0, 255));
        assert_eq!(plan[2].color, Rgba8::new(0, 0, 255, 255));
    }
    #[test]
    fn mirrored_copy_shares_its_rotation_color() {
        let plan = plan_segment(segment(), CENTER, &settings(3, true, true));
        assert_eq!(plan.len(), 6);
        // Pairs: (primary, mirror), (rot1, rot1-mirror), (rot2, rot2-mirror).
        for pair in plan.chunks(2) {
            assert_eq!(pair[0].color, pair[1].color);
        }
    }
}
