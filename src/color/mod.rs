//! Color space conversion and measurement extraction

pub mod conversion;
pub mod properties;

pub use conversion::{
    hex_to_rgb, lab_to_hcl, normalize_hue, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_lab, Hcl,
    Hsl, Hsv, Lab, Rgb,
};
pub use properties::{get_color_properties, ColorProperties};
