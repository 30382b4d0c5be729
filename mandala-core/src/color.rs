//! # Color
//!
//! 8-bit RGBA for scene primitives, plus the HSV hue-stepping that produces
//! rainbow-mode's color progression across the slices of a single stroke.

/// Straight (non-premultiplied) 8-bit RGBA.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}
impl Rgba8 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// HSV with hue in whole degrees `0..360` and 8-bit saturation/value.
///
/// Integer hue matters: the cycle step is `360 / slices` with floor division,
/// so seven slices step by 51°, not 51.43°.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Hsv {
    pub hue: i32,
    pub saturation: u8,
    pub value: u8,
}
impl Hsv {
    /// Convert from RGB, alpha discarded. Achromatic colors report hue 0.
    #[must_use]
    pub fn from_rgb(color: Rgba8) -> Self {
        let r = f32::from(color.r) / 255.0;
        let g = f32::from(color.g) / 255.0;
        let b = f32::from(color.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta <= f32::EPSILON {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        Self {
            hue: (hue.round() as i32).rem_euclid(360),
            saturation: if max <= f32::EPSILON {
                0
            } else {
                ((delta / max) * 255.0).round() as u8
            },
            value: (max * 255.0).round() as u8,
        }
    }
    /// Convert back to RGB, carrying the given alpha through.
    #[must_use]
    pub fn to_rgba(self, alpha: u8) -> Rgba8 {
        let s = f32::from(self.saturation) / 255.0;
        let v = f32::from(self.value) / 255.0;
        let h = self.hue.rem_euclid(360) as f32 / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);
        let (r, g, b) = match sector as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        let channel = |c: f32| (c * 255.0).round() as u8;
        Rgba8::new(channel(r), channel(g), channel(b), alpha)
    }
}

/// Advance `hsv` by one slice step: `360 / slice_count` degrees (floor
/// division), wrapped modulo 360. Saturation and value pass through.
///
/// Callers must guarantee `slice_count >= 1`; the renderer only cycles while
/// replicating, so this holds by construction.
#[must_use]
pub fn next_hue(hsv: Hsv, slice_count: u32) -> Hsv {
    debug_assert!(slice_count >= 1);
    Hsv {
        hue: (hsv.hue + (360 / slice_count) as i32).rem_euclid(360),
        ..hsv
    }
}
