//! Color space conversions
//!
//! Direct conversions between hex, sRGB, HSL, HSV, CIE Lab and HCL (the polar
//! form of Lab). RGB components are normalized to 0.0–1.0; hue is expressed in
//! degrees [0, 360) and saturation/lightness/value in percent [0, 100].
//!
//! Every function is total. Malformed hex input degrades to black.

use serde::{Deserialize, Serialize};

/// sRGB color with components in the 0.0–1.0 range
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from 0–255 channel values
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Convert to 0–255 channel values (clamped, rounded)
    pub fn to_u8(&self) -> (u8, u8, u8) {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// CIE L*a*b* (D65)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Polar Lab: hue angle, chroma, lightness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hcl {
    pub h: f64,
    pub c: f64,
    pub l: f64,
}

// ============================================================================
// HEX
// ============================================================================

/// Parse `#RGB` / `#RRGGBB` (the `#` is optional). Anything else is black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let trimmed = hex.trim();
    let stripped = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return Rgb::BLACK;
    }

    let parse = |s: &str| u8::from_str_radix(s, 16).ok();

    let channels = match stripped.len() {
        3 => {
            let digits: Vec<Option<u8>> = (0..3).map(|i| parse(&stripped[i..i + 1])).collect();
            match digits[..] {
                [Some(r), Some(g), Some(b)] => Some((r * 17, g * 17, b * 17)),
                _ => None,
            }
        }
        6 => match (parse(&stripped[0..2]), parse(&stripped[2..4]), parse(&stripped[4..6])) {
            (Some(r), Some(g), Some(b)) => Some((r, g, b)),
            _ => None,
        },
        _ => None,
    };

    channels
        .map(|(r, g, b)| Rgb::from_u8(r, g, b))
        .unwrap_or(Rgb::BLACK)
}

/// Format as uppercase `#RRGGBB`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let (r, g, b) = rgb.to_u8();
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// ============================================================================
// HSL / HSV
// ============================================================================

/// Hue in degrees from the max channel, 0 for achromatic colors
fn hue_degrees(rgb: Rgb, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let Rgb { r, g, b } = rgb;
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    normalize_hue(sector * 60.0)
}

pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h: hue_degrees(rgb, max, delta),
        s: s * 100.0,
        v: max * 100.0,
    }
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl {
        h: hue_degrees(rgb, max, delta),
        s: s * 100.0,
        l: l * 100.0,
    }
}

// ============================================================================
// LAB / HCL
// ============================================================================

/// D65 reference white
const REF_X: f64 = 95.047;
const REF_Y: f64 = 100.000;
const REF_Z: f64 = 108.883;

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// sRGB → CIE Lab via linear RGB and XYZ (D65)
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let r = srgb_to_linear(rgb.r.clamp(0.0, 1.0)) * 100.0;
    let g = srgb_to_linear(rgb.g.clamp(0.0, 1.0)) * 100.0;
    let b = srgb_to_linear(rgb.b.clamp(0.0, 1.0)) * 100.0;

    let x = r * 0.4124564 + g * 0.3575761 + b * 0.1804375;
    let y = r * 0.2126729 + g * 0.7151522 + b * 0.0721750;
    let z = r * 0.0193339 + g * 0.1191920 + b * 0.9503041;

    let fx = lab_f(x / REF_X);
    let fy = lab_f(y / REF_Y);
    let fz = lab_f(z / REF_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

pub fn lab_to_hcl(lab: Lab) -> Hcl {
    Hcl {
        h: normalize_hue(lab.b.atan2(lab.a).to_degrees()),
        c: (lab.a * lab.a + lab.b * lab.b).sqrt(),
        l: lab.l,
    }
}

/// Wrap any angle into [0, 360)
pub fn normalize_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_rgb("#FF0000"), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(hex_to_rgb("00ff00"), Rgb::new(0.0, 1.0, 0.0));
        assert_eq!(hex_to_rgb("#fff"), Rgb::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_malformed_hex_is_black() {
        for bad in ["", "#", "#12", "#GGGGGG", "#12345", "not a color", "#1234567", "##fff", "##FFFFFF"] {
            assert_eq!(hex_to_rgb(bad), Rgb::BLACK, "input {:?}", bad);
        }
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(rgb_to_hex(Rgb::from_u8(0xC6, 0x86, 0x42)), "#C68642");
        assert_eq!(rgb_to_hex(Rgb::new(1.2, -0.1, 0.5)), "#FF0080");
    }

    #[test]
    fn test_hsv_primaries() {
        let red = rgb_to_hsv(Rgb::new(1.0, 0.0, 0.0));
        assert_relative_eq!(red.h, 0.0);
        assert_relative_eq!(red.s, 100.0);
        assert_relative_eq!(red.v, 100.0);

        let blue = rgb_to_hsv(Rgb::new(0.0, 0.0, 1.0));
        assert_relative_eq!(blue.h, 240.0);

        // Magenta-leaning red lands just under 360
        let rose = rgb_to_hsv(Rgb::new(1.0, 0.0, 0.1));
        assert!(rose.h > 350.0 && rose.h < 360.0);
    }

    #[test]
    fn test_hsl_gray() {
        let gray = rgb_to_hsl(Rgb::new(0.5, 0.5, 0.5));
        assert_relative_eq!(gray.s, 0.0);
        assert_relative_eq!(gray.l, 50.0);
    }

    #[test]
    fn test_lab_reference_points() {
        let white = rgb_to_lab(Rgb::new(1.0, 1.0, 1.0));
        assert_relative_eq!(white.l, 100.0, epsilon = 0.01);
        assert_relative_eq!(white.a, 0.0, epsilon = 0.01);
        assert_relative_eq!(white.b, 0.0, epsilon = 0.01);

        let black = rgb_to_lab(Rgb::BLACK);
        assert_relative_eq!(black.l, 0.0, epsilon = 0.01);

        // sRGB red: L≈53.24, a≈80.09, b≈67.20
        let red = rgb_to_lab(Rgb::new(1.0, 0.0, 0.0));
        assert_relative_eq!(red.l, 53.24, epsilon = 0.05);
        assert_relative_eq!(red.a, 80.09, epsilon = 0.1);
        assert_relative_eq!(red.b, 67.20, epsilon = 0.1);
    }

    #[test]
    fn test_hcl_polar_form() {
        let hcl = lab_to_hcl(Lab { l: 50.0, a: 0.0, b: -20.0 });
        assert_relative_eq!(hcl.h, 270.0, epsilon = 1e-9);
        assert_relative_eq!(hcl.c, 20.0, epsilon = 1e-9);
        assert_relative_eq!(hcl.l, 50.0);
    }

    #[test]
    fn test_normalize_hue() {
        assert_relative_eq!(normalize_hue(-10.0), 350.0);
        assert_relative_eq!(normalize_hue(720.0), 0.0);
        assert!(normalize_hue(-1e-14) < 360.0);
    }
}
