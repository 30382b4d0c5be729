//! # Raster
//!
//! Software rasterizer for snapshot capture and export. Primitives are drawn
//! in scene order over an opaque white background: thick round-capped lines
//! with a hard edge (no anti-aliasing), dashed guides as stroked
//! sub-segments, and image primitives as a scaled blit. A same-size image
//! blit is an exact pixel copy, which is what keeps
//! snapshot → restore → snapshot stable across undo/redo.

use crate::color::Rgba8;
use crate::geometry::{Point, Segment};
use crate::scene::{Line, LineStyle, Primitive, Scene};

/// Dash run length, in multiples of the pen width.
const DASH_LEN: f32 = 4.0;
/// Gap between dashes, in multiples of the pen width.
const DASH_GAP: f32 = 2.0;

/// Draw every primitive of `scene` into a fresh white image.
#[must_use]
pub fn rasterize(scene: &Scene, width: u32, height: u32) -> image::RgbaImage {
    let mut img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]));
    if width == 0 || height == 0 {
        return img;
    }
    for (_, primitive) in scene.iter() {
        match primitive {
            Primitive::Image(src) => blit_scaled(&mut img, src),
            Primitive::Line(line) => match line.style {
                LineStyle::Solid => stroke_segment(&mut img, line.segment, line.width, line.color),
                LineStyle::Dashed => stroke_dashed(&mut img, line),
            },
        }
    }
    img
}

/// Source-over one pixel. The destination stays opaque - everything is
/// composited over the white background.
fn blend(dst: &mut image::Rgba<u8>, src: Rgba8) {
    match src.a {
        0 => {}
        255 => dst.0 = [src.r, src.g, src.b, 255],
        alpha => {
            let alpha = u32::from(alpha);
            let inverse = 255 - alpha;
            for (d, s) in dst.0.iter_mut().zip([src.r, src.g, src.b]) {
                *d = ((u32::from(s) * alpha + u32::from(*d) * inverse + 127) / 255) as u8;
            }
            dst.0[3] = 255;
        }
    }
}

fn blit_scaled(dst: &mut image::RgbaImage, src: &image::RgbaImage) {
    let from_pixel = |p: &image::Rgba<u8>| Rgba8::new(p.0[0], p.0[1], p.0[2], p.0[3]);
    if src.dimensions() == dst.dimensions() {
        for (d, s) in dst.pixels_mut().zip(src.pixels()) {
            blend(d, from_pixel(s));
        }
    } else {
        let scaled = image::imageops::resize(
            src,
            dst.width(),
            dst.height(),
            image::imageops::FilterType::Triangle,
        );
        for (d, s) in dst.pixels_mut().zip(scaled.pixels()) {
            blend(d, from_pixel(s));
        }
    }
}

/// Stroke one solid round-capped segment: every pixel whose center is within
/// half the pen width of the segment gets the color.
fn stroke_segment(img: &mut image::RgbaImage, segment: Segment, width: f32, color: Rgba8) {
    let radius = (width * 0.5).max(0.5);
    let (img_w, img_h) = img.dimensions();
    let clamp_x = |v: f32| v.clamp(0.0, (img_w - 1) as f32) as u32;
    let clamp_y = |v: f32| v.clamp(0.0, (img_h - 1) as f32) as u32;

    let min_x = clamp_x((segment.start.x.min(segment.end.x) - radius).floor());
    let max_x = clamp_x((segment.start.x.max(segment.end.x) + radius).ceil());
    let min_y = clamp_y((segment.start.y.min(segment.end.y) - radius).floor());
    let max_y = clamp_y((segment.start.y.max(segment.end.y) + radius).ceil());

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let pixel_center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            if distance_to_segment(pixel_center, segment) <= radius {
                blend(img.get_pixel_mut(x, y), color);
            }
        }
    }
}

fn stroke_dashed(img: &mut image::RgbaImage, line: &Line) {
    let length = line.segment.length();
    if length <= f32::EPSILON {
        stroke_segment(img, line.segment, line.width, line.color);
        return;
    }
    let dash = DASH_LEN * line.width;
    let gap = DASH_GAP * line.width;
    let at = |t: f32| {
        let frac = t / length;
        Point::new(
            line.segment.start.x + (line.segment.end.x - line.segment.start.x) * frac,
            line.segment.start.y + (line.segment.end.y - line.segment.start.y) * frac,
        )
    };
    let mut t = 0.0;
    while t < length {
        let end = (t + dash).min(length);
        stroke_segment(
            img,
            Segment::new(at(t), at(end)),
            line.width,
            line.color,
        );
        t = end + gap;
    }
}

fn distance_to_segment(point: Point, segment: Segment) -> f32 {
    let dx = segment.end.x - segment.start.x;
    let dy = segment.end.y - segment.start.y;
    let length_sq = dx * dx + dy * dy;
    // Degenerate segments collapse to their start point.
    let t = if length_sq <= f32::EPSILON {
        0.0
    } else {
        (((point.x - segment.start.x) * dx + (point.y - segment.start.y) * dy) / length_sq)
            .clamp(0.0, 1.0)
    };
    let nearest_x = segment.start.x + t * dx;
    let nearest_y = segment.start.y + t * dy;
    ((point.x - nearest_x).powi(2) + (point.y - nearest_y).powi(2)).sqrt()
}

#[cfg(test)]
mod test {
    use super::rasterize;
    use crate::color::Rgba8;
    use crate::geometry::{Point, Segment};
    use crate::scene::{Line, LineStyle, Primitive, Scene};

    fn line(start: (f32, f32), end: (f32, f32), width: f32, style: LineStyle) -> Primitive {
        Primitive::Line(Line {
            segment: Segment::new(Point::new(start.0, start.1), Point::new(end.0, end.1)),
            width,
            color: Rgba8::BLACK,
            style,
        })
    }

    #[test]
    fn empty_scene_is_white() {
        let img = rasterize(&Scene::new(), 16, 16);
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }
    #[test]
    fn solid_stroke_covers_its_path() {
        let mut scene = Scene::new();
        scene.insert(line((2.0, 8.0), (13.0, 8.0), 2.0, LineStyle::Solid));
        let img = rasterize(&scene, 16, 16);
        // On the path: black. Far away: untouched.
        assert_eq!(img.get_pixel(7, 8).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(7, 1).0, [255, 255, 255, 255]);
    }
    #[test]
    fn dashes_leave_gaps() {
        let mut scene = Scene::new();
        // Width 1: dashes run 4px with 2px gaps along y = 4.
        scene.insert(line((0.0, 4.0), (32.0, 4.0), 1.0, LineStyle::Dashed));
        let img = rasterize(&scene, 32, 8);
        let row: Vec<bool> = (0..32).map(|x| img.get_pixel(x, 4).0 != [255, 255, 255, 255]).collect();
        assert!(row.iter().any(|&hit| hit));
        assert!(row.iter().any(|&hit| !hit));
    }
    #[test]
    fn same_size_blit_is_exact() {
        let mut source = image::RgbaImage::from_pixel(8, 8, image::Rgba([255, 255, 255, 255]));
        source.get_pixel_mut(3, 5).0 = [10, 200, 30, 255];
        let mut scene = Scene::new();
        scene.insert(Primitive::Image(std::sync::Arc::new(source.clone())));
        let out = rasterize(&scene, 8, 8);
        assert_eq!(out, source);
    }
    #[test]
    fn translucent_blend_rounds_over_white() {
        let mut scene = Scene::new();
        scene.insert(Primitive::Line(Line {
            segment: Segment::new(Point::new(0.0, 2.0), Point::new(4.0, 2.0)),
            width: 2.0,
            color: Rgba8::new(0, 0, 0, 80),
            style: LineStyle::Solid,
        }));
        let img = rasterize(&scene, 4, 4);
        // 255 * (255 - 80) / 255 = 175, rounded.
        assert_eq!(img.get_pixel(1, 2).0, [175, 175, 175, 255]);
    }
}
