//! Perceptual measurements of a sampled color
//!
//! Bundles every representation the scoring pipeline reads from a single hex
//! string: HSV hue for temperature, HCL chroma for intensity and HCL
//! lightness for depth.

use serde::{Deserialize, Serialize};

use super::conversion::{
    hex_to_rgb, lab_to_hcl, rgb_to_hsl, rgb_to_hsv, rgb_to_lab, Hcl, Hsl, Hsv, Lab,
    Rgb,
};

/// All color-space views of one sampled color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorProperties {
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub lab: Lab,
    pub hcl: Hcl,
}

impl ColorProperties {
    /// Measurement used for temperature (HSV hue, degrees)
    pub fn hue(&self) -> f64 {
        self.hsv.h
    }

    /// HSV saturation (percent), drives the desaturation adjustment
    pub fn saturation(&self) -> f64 {
        self.hsv.s
    }

    /// Measurement used for intensity (HCL chroma)
    pub fn chroma(&self) -> f64 {
        self.hcl.c
    }

    /// Measurement used for depth (HCL lightness, 0-100)
    pub fn lightness(&self) -> f64 {
        self.hcl.l
    }
}

/// Derive every measurement for a hex color. Malformed hex reads as black.
pub fn get_color_properties(hex: &str) -> ColorProperties {
    let rgb = hex_to_rgb(hex);
    let lab = rgb_to_lab(rgb);

    ColorProperties {
        rgb,
        hsl: rgb_to_hsl(rgb),
        hsv: rgb_to_hsv(rgb),
        lab,
        hcl: lab_to_hcl(lab),
    }
}
