//! Transfer functions relating linear light to an encoded signal.
//!
//! Both curves are extended to negative values by mirroring them around the
//! origin, so they can be applied to canonical RGB in [-1, 1] directly.

use crate::color::{Component, Components};

/// A transfer function (or gamma) between linear light and an encoded
/// signal.
pub trait TransferFunction {
    /// Encode a linear value.
    fn encode(value: Component) -> Component;

    /// Decode an encoded value back to linear.
    fn decode(value: Component) -> Component;

    /// Encode each of the components.
    fn encode_components(from: &Components) -> Components {
        from.map(|value| value.signum() * Self::encode(value.abs()))
    }

    /// Decode each of the components.
    fn decode_components(from: &Components) -> Components {
        from.map(|value| value.signum() * Self::decode(value.abs()))
    }
}

/// The sRGB transfer function.
#[derive(Debug)]
pub struct Srgb;

impl TransferFunction for Srgb {
    fn encode(value: Component) -> Component {
        if value <= 0.0031308 {
            12.92 * value
        } else {
            1.055 * value.powf(1.0 / 2.4) - 0.055
        }
    }

    fn decode(value: Component) -> Component {
        if value <= 0.04045 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }
}

/// The Rec. 709 (BT.709) opto-electronic transfer function.
#[derive(Debug)]
pub struct Rec709;

impl TransferFunction for Rec709 {
    fn encode(value: Component) -> Component {
        if value < 0.018 {
            4.5 * value
        } else {
            1.099 * value.powf(0.45) - 0.099
        }
    }

    fn decode(value: Component) -> Component {
        if value < 0.081 {
            value / 4.5
        } else {
            ((value + 0.099) / 1.099).powf(1.0 / 0.45)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn srgb_boundaries() {
        assert_eq!(Srgb::encode(0.0), 0.0);
        assert_component_eq!(Srgb::encode(1.0), 1.0);
        assert_component_eq!(Srgb::encode(0.002), 0.02584);
        assert_component_eq!(Srgb::encode(0.5), 0.7353569830524495);
        assert_component_eq!(Srgb::decode(0.7353569830524495), 0.5);
    }

    #[test]
    fn rec709_boundaries() {
        assert_eq!(Rec709::encode(0.0), 0.0);
        assert_component_eq!(Rec709::encode(1.0), 1.0);
        assert_component_eq!(Rec709::encode(0.01), 0.045);
        assert_component_eq!(Rec709::decode(0.045), 0.01);
    }

    #[test]
    fn round_trip() {
        for i in 0..=100 {
            let v = i as Component / 100.0;
            assert_component_eq!(Srgb::decode(Srgb::encode(v)), v);
            assert_component_eq!(Rec709::decode(Rec709::encode(v)), v);
        }
    }

    #[test]
    fn negative_values_are_mirrored() {
        let encoded = Srgb::encode_components(&Components(-0.5, 0.0, 0.5));
        assert_component_eq!(encoded.0, -encoded.2);
        assert_eq!(encoded.1, 0.0);

        let decoded = Rec709::decode_components(&Components(-1.0, -0.045, 1.0));
        assert_component_eq!(decoded.0, -1.0);
        assert_component_eq!(decoded.1, -0.01);
        assert_component_eq!(decoded.2, 1.0);
    }
}
