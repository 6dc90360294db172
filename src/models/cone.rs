//! Models for the cone excitation (LMS) and cone opponent (DKL) spaces. The
//! conversions to and from canonical RGB take the calibration matrix of the
//! display.

use crate::color::{Component, HasSpace, Space};
use crate::math::{spherical_to_cartesian, transform, Transform};
use crate::models::Rgb;

stimcolor_macros::gen_model! {
    /// Long, medium and short wavelength cone excitation.
    pub struct Lms {
        /// Long wavelength cone excitation.
        long: Component,
        /// Medium wavelength cone excitation.
        medium: Component,
        /// Short wavelength cone excitation.
        short: Component,
    }
}

impl HasSpace for Lms {
    const SPACE: Space = Space::Lms;
}

impl Lms {
    /// Convert to canonical RGB with a cones to RGB matrix.
    pub fn to_rgb(&self, cones_to_rgb: &Transform) -> Rgb {
        transform(cones_to_rgb, &self.to_components()).into()
    }

    /// Convert from canonical RGB with an RGB to cones matrix.
    pub fn from_rgb(rgb: &Rgb, rgb_to_cones: &Transform) -> Self {
        transform(rgb_to_cones, &rgb.to_components()).into()
    }
}

stimcolor_macros::gen_model! {
    /// DKL in spherical coordinates, angles in degrees.
    pub struct Dkl {
        /// Elevation from the isoluminant plane.
        elevation: Component,
        /// Azimuth in the isoluminant plane, 0 along L-M.
        azimuth: Component,
        /// Distance from the origin.
        radius: Component,
    }
}

impl HasSpace for Dkl {
    const SPACE: Space = Space::Dkl;
}

impl Dkl {
    /// Convert to cartesian coordinates.
    pub fn to_cartesian(&self) -> DklCart {
        let (x, y, z) = spherical_to_cartesian(self.elevation, self.azimuth, self.radius);
        DklCart::new(z, x, y)
    }
}

stimcolor_macros::gen_model! {
    /// DKL in cartesian coordinates.
    pub struct DklCart {
        /// The luminance axis.
        luminance: Component,
        /// The L-M (red-green) axis.
        lm: Component,
        /// The S-(L+M) (blue-yellow) axis.
        s: Component,
    }
}

impl HasSpace for DklCart {
    const SPACE: Space = Space::DklCart;
}

impl DklCart {
    /// Convert to canonical RGB with a DKL to RGB matrix.
    pub fn to_rgb(&self, dkl_to_rgb: &Transform) -> Rgb {
        transform(dkl_to_rgb, &self.to_components()).into()
    }

    /// Convert from canonical RGB with an RGB to DKL matrix.
    pub fn from_rgb(rgb: &Rgb, rgb_to_dkl: &Transform) -> Self {
        transform(rgb_to_dkl, &rgb.to_components()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::math::transform_from_rows;

    #[test]
    fn dkl_axes() {
        let cart = Dkl::new(0.0, 90.0, 1.0).to_cartesian();
        assert_component_eq!(cart.luminance, 0.0);
        assert_component_eq!(cart.lm, 0.0);
        assert_component_eq!(cart.s, 1.0);

        let cart = Dkl::new(90.0, 0.0, 0.5).to_cartesian();
        assert_component_eq!(cart.luminance, 0.5);
        assert_component_eq!(cart.lm, 0.0);
        assert_component_eq!(cart.s, 0.0);
    }

    #[test]
    fn matrices_are_applied_to_columns() {
        let m = transform_from_rows(&[[1.0, 1.0, -0.1462], [1.0, -0.39, 0.2094], [1.0, 0.018, -1.0]]);
        let rgb = DklCart::new(0.0, 0.0, 1.0).to_rgb(&m);
        assert_component_eq!(rgb.red, -0.1462);
        assert_component_eq!(rgb.green, 0.2094);
        assert_component_eq!(rgb.blue, -1.0);

        let back = DklCart::from_rgb(&rgb, &m.inverse().unwrap());
        assert_component_eq!(back.luminance, 0.0);
        assert_component_eq!(back.lm, 0.0);
        assert_component_eq!(back.s, 1.0);
    }

    #[test]
    fn lms_round_trip() {
        let m = transform_from_rows(&[[2.0, 0.0, 0.0], [0.0, 1.0, 0.5], [0.0, 0.0, 1.0]]);
        let lms = Lms::new(0.25, -0.5, 0.1);
        let rgb = lms.to_rgb(&m);
        assert_component_eq!(rgb.red, 0.5);
        assert_component_eq!(rgb.green, -0.45);
        let back = Lms::from_rgb(&rgb, &m.inverse().unwrap());
        assert_component_eq!(back.long, 0.25);
        assert_component_eq!(back.medium, -0.5);
        assert_component_eq!(back.short, 0.1);
    }
}
