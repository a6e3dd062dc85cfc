//! HSL and RGB color triples.
//!
//! Lighting keyframes are authored in HSL and blended componentwise. The
//! blend never takes the shortest arc around the hue wheel, so two keyframes
//! whose hues sit on opposite sides of 0.0/1.0 will sweep through every hue
//! in between.

use serde::{Deserialize, Serialize};

use crate::easing::lerp;

/// A color in hue/saturation/lightness, each nominally in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Componentwise linear blend toward `other`.
    #[must_use]
    pub fn lerp(self, other: Hsl, t: f32) -> Hsl {
        Hsl {
            h: lerp(self.h, other.h, t),
            s: lerp(self.s, other.s, t),
            l: lerp(self.l, other.l, t),
        }
    }

    /// Convert to RGB. Hue wraps into `[0.0, 1.0)`; saturation and lightness
    /// clamp to `[0.0, 1.0]`.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(1.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Rgb::new(l, l, l);
        }

        let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let q = 2.0 * l - p;

        Rgb::new(
            hue_to_channel(q, p, h + 1.0 / 3.0),
            hue_to_channel(q, p, h),
            hue_to_channel(q, p, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// A color in red/green/blue, each in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-4 && (a.g - b.g).abs() < 1e-4 && (a.b - b.b).abs() < 1e-4
    }

    #[test]
    fn test_lerp_is_componentwise() {
        let a = Hsl::new(0.6, 0.8, 0.2);
        let b = Hsl::new(0.08, 0.9, 0.8);
        let mid = a.lerp(b, 0.5);
        assert!((mid.h - 0.34).abs() < 1e-6);
        assert!((mid.s - 0.85).abs() < 1e-6);
        assert!((mid.l - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_takes_long_way_around_hue() {
        let a = Hsl::new(0.95, 1.0, 0.5);
        let b = Hsl::new(0.05, 1.0, 0.5);
        assert!((a.lerp(b, 0.5).h - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_primary_hues() {
        assert!(close(Hsl::new(0.0, 1.0, 0.5).to_rgb(), Rgb::new(1.0, 0.0, 0.0)));
        assert!(close(Hsl::new(1.0 / 3.0, 1.0, 0.5).to_rgb(), Rgb::new(0.0, 1.0, 0.0)));
        assert!(close(Hsl::new(2.0 / 3.0, 1.0, 0.5).to_rgb(), Rgb::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_grey_when_unsaturated() {
        assert!(close(Hsl::new(0.4, 0.0, 0.3).to_rgb(), Rgb::new(0.3, 0.3, 0.3)));
    }

    #[test]
    fn test_full_lightness_is_white() {
        assert!(close(Hsl::new(0.12, 0.15, 1.0).to_rgb(), Rgb::WHITE));
    }

    #[test]
    fn test_hue_wraps_for_conversion() {
        assert!(close(Hsl::new(1.25, 1.0, 0.5).to_rgb(), Hsl::new(0.25, 1.0, 0.5).to_rgb()));
    }

    #[test]
    fn test_from_hex() {
        let c = Rgb::from_hex(0x333366);
        assert!((c.r - 0.2).abs() < 1e-6);
        assert!((c.g - 0.2).abs() < 1e-6);
        assert!((c.b - 0.4).abs() < 1e-6);
    }
}
