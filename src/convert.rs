//! Conversions between canonical RGB and the basic color spaces. Every space
//! converts directly to and from canonical RGB; conversions between two other
//! spaces go through it.
//!
//! Alpha is carried separately. Spaces without an alpha channel leave the
//! alpha of the color unchanged when set.

use crate::color::{Component, Components, Space};
use crate::error::{ColorError, ColorResult};
use crate::models::{Hsv, Rgb, Rgb1, Rgb255};
use crate::named;
use crate::value::{format_hex, parse_hex, RawValue, Values};

/// The canonical value decoded from a raw value, and the alpha it carried.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoded {
    /// Canonical RGB.
    pub franca: Components,
    /// Alpha, if the value set it.
    pub alpha: Option<Component>,
}

impl Decoded {
    fn new(rgb: Rgb, alpha: Option<Component>) -> Self {
        Self {
            franca: rgb.to_components(),
            alpha,
        }
    }
}

/// Express canonical RGB and alpha in one of the basic spaces.
pub fn encode(space: Space, franca: Components, alpha: Component) -> ColorResult<Values> {
    use Space as S;

    let rgb = Rgb::from(franca);

    Ok(match space {
        S::Rgb => Values::Triple(franca),
        S::Rgba => Values::Quad(franca, alpha),
        S::Rgb1 => Values::Triple(rgb.to_rgb1().to_components()),
        S::Rgba1 => Values::Quad(rgb.to_rgb1().to_components(), alpha),
        S::Rgb255 => Values::Triple(rgb.to_rgb1().to_rgb255().to_components()),
        S::Rgba255 => Values::Quad(rgb.to_rgb1().to_rgb255().to_components(), alpha),
        S::Hex => Values::Text(format_hex(&rgb.to_rgb1().to_rgb255().to_bytes())),
        S::Hexa => {
            let [r, g, b] = rgb.to_rgb1().to_rgb255().to_bytes();
            Values::Text(format_hex(&[r, g, b, alpha_byte(alpha)]))
        }
        S::Hsv => Values::Triple(rgb.to_rgb1().to_hsv().to_components()),
        S::Hsva => {
            let rgb1 = rgb.to_rgb1();
            let hsv = rgb1.to_hsv();
            // Achromatic colors come back without alpha.
            if rgb1.to_components().min() == rgb1.to_components().max() {
                Values::Triple(hsv.to_components())
            } else {
                Values::Quad(hsv.to_components(), alpha)
            }
        }
        S::Named => Values::Text(name_of(franca, alpha)?.to_string()),
        space => return Err(ColorError::UnsupportedSpace(space)),
    })
}

/// Read a raw value, already validated for `space`, as canonical RGB.
pub fn decode(space: Space, raw: &RawValue) -> ColorResult<Decoded> {
    use Space as S;

    match space {
        S::Named => {
            let text = raw.as_text().ok_or_else(|| invalid(space, raw))?;
            let named = named::lookup(text).ok_or_else(|| invalid(space, raw))?;
            let alpha = (named.name == named::NONE).then_some(0.0);
            Ok(Decoded {
                franca: named.rgb,
                alpha,
            })
        }
        S::Hex | S::Hexa => {
            let text = raw.as_text().ok_or_else(|| invalid(space, raw))?;
            let digits = if space == S::Hex { 6 } else { 8 };
            let bytes = parse_hex(text, digits).ok_or_else(|| invalid(space, raw))?;
            let rgb = Rgb255::from([bytes[0], bytes[1], bytes[2]]).to_rgb1().to_rgb();
            let alpha = bytes.get(3).map(|a| *a as Component / 255.0);
            Ok(Decoded::new(rgb, alpha))
        }
        _ => {
            let (c, alpha) = raw.split_alpha().ok_or_else(|| invalid(space, raw))?;
            let rgb = match space.base() {
                S::Rgb => Rgb::from(c),
                S::Rgb1 => Rgb1::from(c).to_rgb(),
                S::Rgb255 => Rgb255::from(c).to_rgb1().to_rgb(),
                S::Hsv => Hsv::from(c).to_rgb1().to_rgb(),
                space => return Err(ColorError::UnsupportedSpace(space)),
            };
            Ok(Decoded::new(rgb, alpha))
        }
    }
}

/// The first table name matching the color. Fully transparent colors are
/// `none`.
fn name_of(franca: Components, alpha: Component) -> ColorResult<&'static str> {
    if alpha == 0.0 {
        return Ok(named::NONE);
    }
    named::reverse_lookup(franca.with_alpha(alpha))
        .map(|named| named.name)
        .ok_or(ColorError::Unnamed)
}

fn alpha_byte(alpha: Component) -> u8 {
    (alpha * 255.0).round().clamp(0.0, 255.0) as u8
}

fn invalid(space: Space, raw: &RawValue) -> ColorError {
    ColorError::InvalidValue(format!("{} is not a valid {} value", raw, space))
}
