//! Models for the RGB encodings of the canonical value.

use crate::color::{Component, HasSpace, Space};
use crate::models::Hsv;

stimcolor_macros::gen_model! {
    /// Canonical RGB, each channel in [-1, 1].
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl Rgb {
    /// Convert to RGB in [0, 1].
    pub fn to_rgb1(&self) -> Rgb1 {
        self.to_components().map(|c| (c + 1.0) / 2.0).into()
    }

    /// Clip each channel to [-1, 1].
    pub fn clipped(&self) -> Self {
        self.to_components().map(|c| c.clamp(-1.0, 1.0)).into()
    }
}

stimcolor_macros::gen_model! {
    /// RGB with each channel in [0, 1].
    pub struct Rgb1 {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl HasSpace for Rgb1 {
    const SPACE: Space = Space::Rgb1;
}

impl Rgb1 {
    /// Convert to canonical RGB.
    pub fn to_rgb(&self) -> Rgb {
        self.to_components().map(|c| 2.0 * (c - 0.5)).into()
    }

    /// Convert to RGB in [0, 255], rounding each channel to the nearest
    /// whole number with ties going to the even neighbour.
    pub fn to_rgb255(&self) -> Rgb255 {
        self.to_components().map(|c| round_half_even(255.0 * c)).into()
    }

    /// Convert to hue, saturation and value. The hue is rounded to whole
    /// degrees. A color without chroma has hue and saturation 0 and the mean
    /// of its channels as value.
    pub fn to_hsv(&self) -> Hsv {
        let c = self.to_components();
        let max = c.max();
        let min = c.min();
        let delta = max - min;

        if delta == 0.0 {
            return Hsv::new(0.0, 0.0, c.mean());
        }

        let hue = if max == self.red {
            ((self.green - self.blue) / delta).rem_euclid(6.0)
        } else if max == self.green {
            (self.blue - self.red) / delta + 2.0
        } else {
            (self.red - self.green) / delta + 4.0
        };

        Hsv::new(
            round_half_even(hue * 60.0).rem_euclid(360.0),
            delta / max,
            max,
        )
    }
}

stimcolor_macros::gen_model! {
    /// RGB with each channel in [0, 255].
    pub struct Rgb255 {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl HasSpace for Rgb255 {
    const SPACE: Space = Space::Rgb255;
}

impl Rgb255 {
    /// Convert to RGB in [0, 1].
    pub fn to_rgb1(&self) -> Rgb1 {
        self.to_components().map(|c| c / 255.0).into()
    }

    /// Convert to bytes, saturating out of range channels.
    pub fn to_bytes(&self) -> [u8; 3] {
        self.to_components()
            .to_array()
            .map(|c| round_half_even(c).clamp(0.0, 255.0) as u8)
    }
}

/// Round half to even, so 127.5 becomes 128 and 2.5 becomes 2.
fn round_half_even(value: Component) -> Component {
    value.round_ties_even()
}

impl From<[u8; 3]> for Rgb255 {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red as Component, green as Component, blue as Component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, models::Model, value::RawValue};

    #[test]
    fn rgb1_round_trip() {
        let rgb = Rgb::new(0.89, -0.35, -0.28);
        let back = rgb.to_rgb1().to_rgb();
        assert_component_eq!(back.red, rgb.red);
        assert_component_eq!(back.green, rgb.green);
        assert_component_eq!(back.blue, rgb.blue);
    }

    #[test]
    fn rgb255_rounds() {
        assert_eq!(Rgb::new(0.0, -1.0, 1.0).to_rgb1().to_rgb255().to_bytes(), [128, 0, 255]);
        assert_eq!(Rgb255::from([242, 84, 91]).to_bytes(), [242, 84, 91]);
        assert_eq!(Rgb255::new(300.0, -2.0, 12.4).to_bytes(), [255, 0, 12]);
    }

    #[test]
    fn rgb255_ties_go_to_even() {
        // Mid grey sits exactly between 127 and 128.
        assert_eq!(Rgb1::new(0.5, 0.5, 0.5).to_rgb255(), Rgb255::new(128.0, 128.0, 128.0));
        assert_eq!(Rgb255::new(2.5, 3.5, 126.5).to_bytes(), [2, 4, 126]);
        assert_eq!(round_half_even(254.5), 254.0);
        assert_eq!(round_half_even(63.75), 64.0);
    }

    #[test]
    fn hsv_of_chromatic_colors() {
        let hsv = Rgb1::new(1.0, 0.0, 0.0).to_hsv();
        assert_eq!(hsv, Hsv::new(0.0, 1.0, 1.0));

        let hsv = Rgb1::new(0.0, 1.0, 0.0).to_hsv();
        assert_eq!(hsv, Hsv::new(120.0, 1.0, 1.0));

        let hsv = Rgb1::new(0.0, 0.0, 0.5).to_hsv();
        assert_eq!(hsv, Hsv::new(240.0, 1.0, 0.5));

        let hsv = Rgb1::new(0.95, 0.3325, 0.363375).to_hsv();
        assert_eq!(hsv.hue, 357.0);
        assert_component_eq!(hsv.saturation, 0.65);
        assert_component_eq!(hsv.value, 0.95);
    }

    #[test]
    fn hue_near_red_wraps() {
        // 359.8 degrees rounds up to a full turn.
        let hsv = Rgb1::new(1.0, 0.0, 0.003).to_hsv();
        assert_eq!(hsv.hue, 0.0);
    }

    #[test]
    fn hsv_of_achromatic_colors() {
        assert_eq!(Rgb1::new(0.25, 0.25, 0.25).to_hsv(), Hsv::new(0.0, 0.0, 0.25));
        assert_eq!(Rgb1::new(0.0, 0.0, 0.0).to_hsv(), Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn raw_value_includes_alpha() {
        assert_eq!(
            Rgb1::new(0.1, 0.2, 0.3).to_raw(0.5),
            RawValue::Tuple(vec![0.1, 0.2, 0.3, 0.5])
        );
        assert_eq!(Rgb1::NAME, "rgb1");
        assert_eq!(Rgb255::NAME, "rgb255");
    }
}
