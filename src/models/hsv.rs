//! Model a color with hue, saturation and value.

use crate::color::{Component, HasSpace, Space};
use crate::models::Rgb1;

stimcolor_macros::gen_model! {
    /// A color specified by hue in degrees, saturation and value in [0, 1].
    pub struct Hsv {
        /// The hue component of the color.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The value component of the color.
        value: Component,
    }
}

impl HasSpace for Hsv {
    const SPACE: Space = Space::Hsv;
}

impl Hsv {
    /// Convert to RGB in [0, 1]. The hue is split into six 60 degree
    /// segments, each blending two of the primaries.
    pub fn to_rgb1(&self) -> Rgb1 {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let chroma = self.saturation * self.value;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = self.value - chroma;

        let (r, g, b) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgb1::new(r + m, g + m, b + m)
    }
}
