//! A [`Color`] holds one canonical RGB value and converts it to any of the
//! supported color spaces on demand.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use tracing::{debug, error, trace, warn};

use crate::convert;
use crate::error::{ColorError, ColorResult};
use crate::math::round_to;
use crate::models::Model;
use crate::space::resolve;
use crate::value::{RawValue, Values};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Combine two sets of components channel by channel.
    pub fn zip(&self, other: &Self, f: impl Fn(Component, Component) -> Component) -> Self {
        Self(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }

    /// The mean of the three components.
    pub fn mean(&self) -> Component {
        (self.0 + self.1 + self.2) / 3.0
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        self.0.min(self.1).min(self.2)
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        self.0.max(self.1).max(self.2)
    }

    /// Return the components as an array.
    pub fn to_array(&self) -> [Component; 3] {
        [self.0, self.1, self.2]
    }

    /// Return the components followed by `alpha`.
    pub fn with_alpha(&self, alpha: Component) -> [Component; 4] {
        [self.0, self.1, self.2, alpha]
    }
}

impl From<[Component; 3]> for Components {
    fn from([c0, c1, c2]: [Component; 3]) -> Self {
        Self(c0, c1, c2)
    }
}

/// Color spaces and notations a color can be read from or written to. The
/// order of the variants is the priority used to resolve ambiguous values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Space {
    /// One of the names in the named color table.
    Named = 0,
    /// `#rrggbb`
    Hex = 1,
    /// `#rrggbbaa`
    Hexa = 2,
    /// Canonical RGB with each channel in [-1, 1].
    Rgb = 3,
    /// [`Space::Rgb`] with alpha.
    Rgba = 4,
    /// RGB with each channel in [0, 1].
    Rgb1 = 5,
    /// [`Space::Rgb1`] with alpha.
    Rgba1 = 6,
    /// RGB with each channel a whole number in [0, 255].
    Rgb255 = 7,
    /// [`Space::Rgb255`] with alpha in [0, 1].
    Rgba255 = 8,
    /// Hue in degrees, saturation and value in [0, 1].
    Hsv = 9,
    /// [`Space::Hsv`] with alpha.
    Hsva = 10,
    /// RGB encoded with the sRGB transfer function.
    SrgbTf = 11,
    /// [`Space::SrgbTf`] with alpha.
    SrgbTfa = 12,
    /// RGB encoded with the Rec. 709 transfer function.
    Rec709Tf = 13,
    /// [`Space::Rec709Tf`] with alpha.
    Rec709Tfa = 14,
    /// Cone excitation space.
    Lms = 15,
    /// [`Space::Lms`] with alpha.
    Lmsa = 16,
    /// Derrington-Krauskopf-Lennie space in spherical coordinates
    /// (elevation, azimuth, radius).
    Dkl = 17,
    /// [`Space::Dkl`] with alpha.
    Dkla = 18,
    /// Derrington-Krauskopf-Lennie space in cartesian coordinates
    /// (luminance, L-M, S).
    DklCart = 19,
    /// [`Space::DklCart`] with alpha.
    DklaCart = 20,
}

impl Space {
    /// All spaces in priority order.
    pub const ALL: [Space; 21] = [
        Space::Named,
        Space::Hex,
        Space::Hexa,
        Space::Rgb,
        Space::Rgba,
        Space::Rgb1,
        Space::Rgba1,
        Space::Rgb255,
        Space::Rgba255,
        Space::Hsv,
        Space::Hsva,
        Space::SrgbTf,
        Space::SrgbTfa,
        Space::Rec709Tf,
        Space::Rec709Tfa,
        Space::Lms,
        Space::Lmsa,
        Space::Dkl,
        Space::Dkla,
        Space::DklCart,
        Space::DklaCart,
    ];

    /// The name the space is known by.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Named => "named",
            Space::Hex => "hex",
            Space::Hexa => "hexa",
            Space::Rgb => "rgb",
            Space::Rgba => "rgba",
            Space::Rgb1 => "rgb1",
            Space::Rgba1 => "rgba1",
            Space::Rgb255 => "rgb255",
            Space::Rgba255 => "rgba255",
            Space::Hsv => "hsv",
            Space::Hsva => "hsva",
            Space::SrgbTf => "srgbTF",
            Space::SrgbTfa => "srgbTFa",
            Space::Rec709Tf => "rec709TF",
            Space::Rec709Tfa => "rec709TFa",
            Space::Lms => "lms",
            Space::Lmsa => "lmsa",
            Space::Dkl => "dkl",
            Space::Dkla => "dkla",
            Space::DklCart => "dklCart",
            Space::DklaCart => "dklaCart",
        }
    }

    /// Whether values in this space carry an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(
            self,
            Space::Hexa
                | Space::Rgba
                | Space::Rgba1
                | Space::Rgba255
                | Space::Hsva
                | Space::SrgbTfa
                | Space::Rec709Tfa
                | Space::Lmsa
                | Space::Dkla
                | Space::DklaCart
        )
    }

    /// The space without its alpha channel.
    pub fn base(&self) -> Space {
        match self {
            Space::Hexa => Space::Hex,
            Space::Rgba => Space::Rgb,
            Space::Rgba1 => Space::Rgb1,
            Space::Rgba255 => Space::Rgb255,
            Space::Hsva => Space::Hsv,
            Space::SrgbTfa => Space::SrgbTf,
            Space::Rec709Tfa => Space::Rec709Tf,
            Space::Lmsa => Space::Lms,
            Space::Dkla => Space::Dkl,
            Space::DklaCart => Space::DklCart,
            other => *other,
        }
    }

    /// The space with an alpha channel. [`Space::Named`] has none and is
    /// returned as is.
    pub fn with_alpha(&self) -> Space {
        match self {
            Space::Hex => Space::Hexa,
            Space::Rgb => Space::Rgba,
            Space::Rgb1 => Space::Rgba1,
            Space::Rgb255 => Space::Rgba255,
            Space::Hsv => Space::Hsva,
            Space::SrgbTf => Space::SrgbTfa,
            Space::Rec709Tf => Space::Rec709Tfa,
            Space::Lms => Space::Lmsa,
            Space::Dkl => Space::Dkla,
            Space::DklCart => Space::DklaCart,
            other => *other,
        }
    }

    /// Whether the space is only available on an
    /// [`AdvancedColor`](crate::AdvancedColor).
    pub fn is_advanced(&self) -> bool {
        *self as u8 >= Space::SrgbTf as u8
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Space::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::UnknownSpace(s.to_string()))
    }
}

/// Implemented by types that hold a color in a single known space.
pub trait HasSpace {
    /// The space values of the type are in.
    const SPACE: Space;
}

/// Contrast used by [`Color::readable`] when none is given: the W3C minimum
/// of 4.5:1, scaled to sRGB units.
pub const DEFAULT_READABLE_CONTRAST: Component = 4.5 / 21.0;

/// A color in any of the basic spaces.
///
/// The color keeps a single canonical RGB triple with channels in [-1, 1]
/// plus alpha. Every other space is derived from it and cached until the
/// color changes. Setters never fail: a value that can not be resolved is
/// logged and leaves the color unresolved, see [`Color::is_valid`].
#[derive(Clone, Debug)]
pub struct Color {
    franca: Option<Components>,
    alpha: Component,
    contrast: Component,
    cache: RefCell<HashMap<Space, Values>>,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            franca: None,
            alpha: 1.0,
            contrast: 1.0,
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl Color {
    /// Create a new [`Color`] from a value in the given space. When `space`
    /// is `None`, or the value is not valid in `space`, the space is
    /// detected from the value.
    /// ```rust
    /// use stimcolor::{Color, Space};
    /// let red = Color::new("red", Space::Named);
    /// assert_eq!(red.hex().as_deref(), Some("#ff0000"));
    /// assert_eq!(red, Color::new((255, 0, 0), Space::Rgb255));
    /// ```
    pub fn new(value: impl Into<RawValue>, space: impl Into<Option<Space>>) -> Self {
        let mut color = Self::default();
        color.set(value, space);
        color
    }

    /// Like [`Color::new`], but return the reason the value could not be
    /// resolved instead of logging it.
    pub fn try_new(value: impl Into<RawValue>, space: impl Into<Option<Space>>) -> ColorResult<Self> {
        let mut color = Self::default();
        color.try_set(value, space)?;
        Ok(color)
    }

    /// Create a color from a typed model and an alpha value.
    pub fn from_model<M: Model>(model: M, alpha: Component) -> Self {
        Self::new(model.to_raw(alpha), M::SPACE.with_alpha())
    }

    /// Return the color with its contrast set to `contrast`.
    pub fn with_contrast(mut self, contrast: Component) -> Self {
        self.set_contrast(contrast);
        self
    }

    /// Set the color from a value. On failure the error is logged and the
    /// color becomes unresolved.
    pub fn set(&mut self, value: impl Into<RawValue>, space: impl Into<Option<Space>>) {
        let raw = value.into();
        if let Err(err) = self.try_set(raw.clone(), space) {
            error!("Could not set color from {}: {}", raw, err);
        }
    }

    /// Set the color from a value, returning the reason on failure. The color
    /// is unresolved after a failure.
    pub fn try_set(
        &mut self,
        value: impl Into<RawValue>,
        space: impl Into<Option<Space>>,
    ) -> ColorResult<()> {
        let raw = value.into().normalized();
        self.try_set_with(&raw, space.into(), |space| !space.is_advanced(), convert::decode)
            .map(|_| ())
    }

    /// Set the color from a value in the given space. Same as
    /// [`Color::set`] with an explicit space.
    pub fn assign(&mut self, space: Space, value: impl Into<RawValue>) {
        self.set(value, space);
    }

    /// Resolve the space of `raw` among the spaces `accepts` allows, decode it
    /// and store the result. Returns the space that was used.
    pub(crate) fn try_set_with(
        &mut self,
        raw: &RawValue,
        declared: Option<Space>,
        accepts: impl Fn(Space) -> bool,
        decode: impl FnOnce(Space, &RawValue) -> ColorResult<convert::Decoded>,
    ) -> ColorResult<Space> {
        let result = resolve(raw, declared, accepts)
            .and_then(|space| decode(space, raw).map(|decoded| (space, decoded)));

        match result {
            Ok((space, decoded)) => {
                trace!("Set color from {} as {}", raw, space);
                self.set_franca(decoded.franca, decoded.alpha);
                Ok(space)
            }
            Err(err) => {
                self.franca = None;
                self.clear_cache();
                Err(err)
            }
        }
    }

    /// Replace the canonical value and optionally the alpha.
    pub(crate) fn set_franca(&mut self, franca: Components, alpha: Option<Component>) {
        self.franca = Some(franca);
        if let Some(alpha) = alpha {
            self.alpha = clamp_alpha(alpha);
        }
        self.clear_cache();
    }

    pub(crate) fn franca(&self) -> Option<Components> {
        self.franca
    }

    pub(crate) fn cache_insert(&self, space: Space, values: Values) {
        self.cache.borrow_mut().insert(space, values);
    }

    pub(crate) fn cached(&self, space: Space) -> Option<Values> {
        self.cache.borrow().get(&space).cloned()
    }

    pub(crate) fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Return the color in `space`, or `None` if it can not be expressed in
    /// that space. Failures are logged.
    pub fn convert(&self, space: Space) -> Option<Values> {
        log_conversion(space, self.try_convert(space))
    }

    /// Return the color in `space`, or the reason it can not be expressed in
    /// that space.
    pub fn try_convert(&self, space: Space) -> ColorResult<Values> {
        if space.is_advanced() {
            return Err(ColorError::UnsupportedSpace(space));
        }
        self.try_convert_with(space, convert::encode)
    }

    pub(crate) fn try_convert_with(
        &self,
        space: Space,
        encode: impl FnOnce(Space, Components, Component) -> ColorResult<Values>,
    ) -> ColorResult<Values> {
        if let Some(values) = self.cached(space) {
            trace!("Cache hit for {}", space);
            return Ok(values);
        }

        let franca = self.franca.ok_or(ColorError::Unresolved)?;
        let values = encode(space, franca, self.alpha)?;
        self.cache_insert(space, values.clone());
        Ok(values)
    }

    /// Return the value of `space` after scaling the color by its contrast
    /// and clipping to the canonical range.
    pub fn render(&self, space: Space) -> Option<Values> {
        log_conversion(space, self.rendered().and_then(|buffer| buffer.try_convert(space)))
    }

    pub(crate) fn rendered(&self) -> ColorResult<Color> {
        let franca = self.franca.ok_or(ColorError::Unresolved)?;
        let contrast = self.contrast;
        let mut buffer = self.clone();
        buffer.set_franca(franca.map(|c| (c * contrast).clamp(-1.0, 1.0)), None);
        Ok(buffer)
    }

    /// Whether the color has a canonical value.
    pub fn is_valid(&self) -> bool {
        self.franca.is_some()
    }

    /// Return an independent copy of the color.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// How opaque (1) or transparent (0) the color is.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// Set the alpha of the color, clamped to [0, 1].
    pub fn set_alpha(&mut self, alpha: Component) {
        if alpha.is_nan() {
            warn!("Ignoring alpha of NaN");
            return;
        }
        self.alpha = clamp_alpha(alpha);
        self.clear_cache();
    }

    /// Synonym for [`Color::alpha`].
    pub fn opacity(&self) -> Component {
        self.alpha()
    }

    /// Synonym for [`Color::set_alpha`].
    pub fn set_opacity(&mut self, opacity: Component) {
        self.set_alpha(opacity);
    }

    /// Factor the color is scaled by in [`Color::render`].
    pub fn contrast(&self) -> Component {
        self.contrast
    }

    /// Set the contrast factor.
    pub fn set_contrast(&mut self, contrast: Component) {
        if !contrast.is_finite() {
            warn!("Ignoring contrast of {}", contrast);
            return;
        }
        self.contrast = contrast;
    }

    /// Mean of the `rgb1` channels.
    pub fn brightness(&self) -> Option<Component> {
        self.rgb1().map(|rgb1| rgb1.mean())
    }

    /// Compare by brightness alone. Unlike `<` and `>`, different colors of
    /// equal brightness compare as equal.
    pub fn cmp_brightness(&self, other: &Color) -> Option<std::cmp::Ordering> {
        self.brightness()?.partial_cmp(&other.brightness()?)
    }

    /// Return a color that stands out against this one. `contrast` ranges
    /// from 0 (the same color) to 1 (as far apart as possible), see
    /// [`DEFAULT_READABLE_CONTRAST`].
    pub fn readable(&self, contrast: Component) -> Color {
        const WEIGHTS: Components = Components(0.2126, 0.7151, 0.0721);
        const GAMMA: Component = 2.2;

        let Some(rgb1) = self.rgb1() else {
            warn!("Can not find a readable color for an unresolved color");
            return Color::default();
        };

        let contrast = contrast * 21.0;
        let luminance = rgb1.map(|c| c.powf(GAMMA)).zip(&WEIGHTS, |c, w| c * w);
        let total = luminance.0 + luminance.1 + luminance.2;
        let adjusted = if total < 0.5 {
            luminance.map(|c| (c + 0.05) * contrast)
        } else {
            luminance.map(|c| (c + 0.05) / contrast)
        };
        let rgb1 = adjusted
            .zip(&WEIGHTS, |c, w| (c / w).powf(1.0 / GAMMA))
            .map(|c| c.clamp(0.0, 1.0));

        Color::new(rgb1, Space::Rgb1)
    }

    /// Canonical RGB, each channel in [-1, 1].
    pub fn rgb(&self) -> Option<Components> {
        self.convert(Space::Rgb).and_then(|v| v.components())
    }

    /// Canonical RGB followed by alpha.
    pub fn rgba(&self) -> Option<[Component; 4]> {
        self.convert(Space::Rgba).and_then(|v| v.to_quad())
    }

    /// RGB with each channel in [0, 1].
    pub fn rgb1(&self) -> Option<Components> {
        self.convert(Space::Rgb1).and_then(|v| v.components())
    }

    /// [`Color::rgb1`] followed by alpha.
    pub fn rgba1(&self) -> Option<[Component; 4]> {
        self.convert(Space::Rgba1).and_then(|v| v.to_quad())
    }

    /// RGB with each channel in [0, 255].
    pub fn rgb255(&self) -> Option<[u8; 3]> {
        self.convert(Space::Rgb255)
            .and_then(|v| v.components())
            .map(|c| c.to_array().map(|c| c as u8))
    }

    /// [`Color::rgb255`] followed by alpha in [0, 1].
    pub fn rgba255(&self) -> Option<[Component; 4]> {
        self.convert(Space::Rgba255).and_then(|v| v.to_quad())
    }

    /// The color as `#rrggbb`.
    pub fn hex(&self) -> Option<String> {
        self.convert_text(Space::Hex)
    }

    /// The color as `#rrggbbaa`.
    pub fn hexa(&self) -> Option<String> {
        self.convert_text(Space::Hexa)
    }

    /// The name of the color, if it has one.
    pub fn named(&self) -> Option<String> {
        self.convert_text(Space::Named)
    }

    /// Hue in degrees, saturation and value.
    pub fn hsv(&self) -> Option<Components> {
        self.convert(Space::Hsv).and_then(|v| v.components())
    }

    /// [`Color::hsv`] followed by alpha. Achromatic colors return only the
    /// three HSV channels.
    pub fn hsva(&self) -> Option<Values> {
        self.convert(Space::Hsva)
    }

    fn convert_text(&self, space: Space) -> Option<String> {
        self.convert(space)
            .and_then(|v| v.as_text().map(str::to_string))
    }
}

macro_rules! setters {
    ($ty:ident { $($(#[$meta:meta])* $name:ident => $space:ident,)* }) => {
        impl $ty {
            $(
                $(#[$meta])*
                pub fn $name(&mut self, value: impl Into<$crate::value::RawValue>) {
                    self.assign($crate::color::Space::$space, value);
                }
            )*
        }
    };
}

pub(crate) use setters;

/// Setters for the basic spaces, shared by every color type.
macro_rules! basic_setters {
    ($ty:ident) => {
        $crate::color::setters! {
            $ty {
                /// Set from canonical RGB.
                set_rgb => Rgb,
                /// Set from canonical RGB with alpha.
                set_rgba => Rgba,
                /// Set from RGB in [0, 1].
                set_rgb1 => Rgb1,
                /// Set from RGB in [0, 1] with alpha.
                set_rgba1 => Rgba1,
                /// Set from RGB in [0, 255].
                set_rgb255 => Rgb255,
                /// Set from RGB in [0, 255] with alpha.
                set_rgba255 => Rgba255,
                /// Set from `#rrggbb`.
                set_hex => Hex,
                /// Set from `#rrggbbaa`.
                set_hexa => Hexa,
                /// Set from a color name.
                set_named => Named,
                /// Set from HSV.
                set_hsv => Hsv,
                /// Set from HSV with alpha.
                set_hsva => Hsva,
            }
        }
    };
}

pub(crate) use basic_setters;

basic_setters!(Color);

fn clamp_alpha(alpha: Component) -> Component {
    alpha.clamp(0.0, 1.0)
}

pub(crate) fn log_conversion(space: Space, result: ColorResult<Values>) -> Option<Values> {
    match result {
        Ok(values) => Some(values),
        Err(ColorError::Unresolved) => {
            trace!("Unresolved color has no {} value", space);
            None
        }
        Err(ColorError::Unnamed) => {
            debug!("Color has no name");
            None
        }
        Err(err) => {
            error!("Could not convert color to {}: {}", space, err);
            None
        }
    }
}

fn rounded_rgba(color: &Color) -> Option<[Component; 4]> {
    color.rgba().map(|rgba| rgba.map(|c| round_to(c, 2)))
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        rounded_rgba(self) == rounded_rgba(other)
    }
}

/// `None` stands for "no color": only a color named `none` equals it.
impl PartialEq<Option<Color>> for Color {
    fn eq(&self, other: &Option<Color>) -> bool {
        match other {
            Some(other) => self == other,
            None => self.named().as_deref() == Some(crate::named::NONE),
        }
    }
}

impl PartialOrd for Color {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let ordering = self.cmp_brightness(other)?;
        if ordering.is_eq() && self != other {
            return None;
        }
        Some(ordering)
    }
}

impl Add for &Color {
    type Output = Color;

    /// Mix two colors: the alpha weighted average of their `rgb1` channels
    /// with the sum of their alphas.
    fn add(self, other: &Color) -> Color {
        let (Some(a), Some(b)) = (self.rgb1(), other.rgb1()) else {
            warn!("Can not add an unresolved color");
            return Color::default();
        };

        let total = self.alpha + other.alpha;
        let rgb1 = if total > 0.0 {
            a.zip(&b, |a, b| (a * self.alpha + b * other.alpha) / total)
        } else {
            a.zip(&b, |a, b| (a + b) / 2.0)
        };

        Color::new(rgb1.with_alpha(total.min(1.0)), Space::Rgba1)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        &self + &other
    }
}

impl Sub for &Color {
    type Output = Color;

    /// Subtract canonical RGB, keeping the alpha of the left color.
    fn sub(self, other: &Color) -> Color {
        let (Some(a), Some(b)) = (self.franca, other.franca) else {
            warn!("Can not subtract an unresolved color");
            return Color::default();
        };

        let mut result = self.clone();
        result.set_franca(a.zip(&b, |a, b| (a - b).clamp(-1.0, 1.0)), None);
        result
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, other: Color) -> Color {
        &self - &other
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return f.write_str("Invalid");
        }
        if let Ok(Values::Text(name)) = self.try_convert(Space::Named) {
            return f.write_str(&name);
        }
        match rounded_rgba(self) {
            Some([r, g, b, a]) => write!(f, "({}, {}, {}, {})", r, g, b, a),
            None => f.write_str("Invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn space_names_round_trip() {
        for space in Space::ALL {
            assert_eq!(space.name().parse::<Space>(), Ok(space));
        }
        assert_eq!("SRGBTF".parse::<Space>(), Ok(Space::SrgbTf));
        assert_eq!(
            "cmyk".parse::<Space>(),
            Err(ColorError::UnknownSpace("cmyk".to_string()))
        );
    }

    #[test]
    fn space_alpha_variants() {
        for space in Space::ALL {
            assert_eq!(space.with_alpha().base(), space.base());
            assert!(!space.base().has_alpha());
            if space != Space::Named {
                assert!(space.with_alpha().has_alpha());
            }
        }
        assert!(!Space::Hsva.is_advanced());
        assert!(Space::SrgbTf.is_advanced());
        assert!(Space::DklaCart.is_advanced());
    }

    #[test]
    fn components_helpers() {
        let c = Components(0.1, 0.5, 0.3);
        assert_component_eq!(c.mean(), 0.3);
        assert_eq!(c.min(), 0.1);
        assert_eq!(c.max(), 0.5);
        assert_eq!(c.zip(&c, |a, b| a + b), Components(0.2, 1.0, 0.6));
        assert_eq!(c.with_alpha(1.0), [0.1, 0.5, 0.3, 1.0]);
    }

    #[test]
    fn default_is_unresolved() {
        let c = Color::default();
        assert!(!c.is_valid());
        assert_eq!(c.alpha(), 1.0);
        assert_eq!(c.rgb(), None);
        assert_eq!(c.to_string(), "Invalid");
    }

    #[test]
    fn set_clears_cache() {
        let mut c = Color::new("red", Space::Named);
        assert_eq!(c.hex().as_deref(), Some("#ff0000"));
        c.set_hex("#0000FF");
        assert_eq!(c.hex().as_deref(), Some("#0000ff"));
        assert_eq!(c.named().as_deref(), Some("blue"));
    }

    #[test]
    fn failed_set_leaves_color_unresolved() {
        let mut c = Color::new("red", Space::Named);
        c.set("not a color", Space::Named);
        assert!(!c.is_valid());
        assert_eq!(c.hex(), None);

        assert!(matches!(
            Color::try_new("not a color", None),
            Err(ColorError::Unresolvable(_))
        ));
    }

    #[test]
    fn advanced_spaces_are_rejected() {
        let c = Color::new((0.0, 0.0, 0.0), Space::Rgb);
        assert_eq!(
            c.try_convert(Space::Lms),
            Err(ColorError::UnsupportedSpace(Space::Lms))
        );
        assert_eq!(
            Color::try_new((0.0, 0.0, 0.0), Space::Lms).err(),
            Some(ColorError::UnsupportedSpace(Space::Lms))
        );
    }

    #[test]
    fn alpha_is_clamped() {
        let mut c = Color::new((1.0, 1.0, 1.0), Space::Rgb);
        c.set_alpha(-3.0);
        assert_eq!(c.alpha(), 0.0);
        c.set_opacity(0.25);
        assert_eq!(c.opacity(), 0.25);
        c.set_alpha(Component::NAN);
        assert_eq!(c.alpha(), 0.25);
        assert_eq!(c.rgba(), Some([1.0, 1.0, 1.0, 0.25]));
    }

    #[test]
    fn equality_rounds_to_two_places() {
        let a = Color::new((0.501, 0.0, 0.0), Space::Rgb);
        let b = Color::new((0.499, 0.0, 0.0), Space::Rgb);
        let c = Color::new((0.52, 0.0, 0.0), Space::Rgb);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn equality_with_none() {
        assert!(Color::new("none", Space::Named) == None);
        assert!(Color::new("red", Space::Named) != None);
        let red = Color::new("red", Space::Named);
        assert!(red == Some(Color::new("#ff0000", Space::Hex)));
    }

    #[test]
    fn ordering_by_brightness() {
        let black = Color::new("black", None);
        let white = Color::new("white", None);
        let grey = Color::new("grey", None);
        assert!(black < white);
        assert!(grey > black);
        assert!(grey <= white);
        assert_eq!(black.partial_cmp(&Color::default()), None);

        // Same brightness, different color.
        let red = Color::new((1.0, -1.0, -1.0), Space::Rgb);
        let green = Color::new((-1.0, 1.0, -1.0), Space::Rgb);
        assert_eq!(red.partial_cmp(&green), None);
        assert!(!red.le(&green));
        assert!(!red.ge(&green));
        assert_eq!(red.cmp_brightness(&green), Some(std::cmp::Ordering::Equal));
        assert_eq!(black.cmp_brightness(&white), Some(std::cmp::Ordering::Less));
        assert_eq!(black.cmp_brightness(&Color::default()), None);
    }

    #[test]
    fn add_mixes_by_alpha() {
        let red = Color::new((1.0, 0.0, 0.0, 1.0), Space::Rgba1);
        let blue = Color::new((0.0, 0.0, 1.0, 0.5), Space::Rgba1);
        let mixed = &red + &blue;
        let rgba1 = mixed.rgba1().unwrap();
        assert_component_eq!(rgba1[0], 2.0 / 3.0);
        assert_component_eq!(rgba1[1], 0.0);
        assert_component_eq!(rgba1[2], 1.0 / 3.0);
        assert_eq!(rgba1[3], 1.0);

        let clear = Color::new((1.0, 1.0, 1.0, 0.0), Space::Rgba1);
        let black = Color::new((0.0, 0.0, 0.0, 0.0), Space::Rgba1);
        let mixed = clear + black;
        assert_eq!(mixed.rgba1(), Some([0.5, 0.5, 0.5, 0.0]));

        assert!(!(Color::default() + Color::new("red", None)).is_valid());
    }

    #[test]
    fn sub_clips_and_keeps_alpha() {
        let a = Color::new((0.5, 0.0, -0.5, 0.4), Space::Rgba);
        let b = Color::new((1.0, -0.5, 1.0), Space::Rgb);
        let c = &a - &b;
        assert_eq!(c.rgba(), Some([-0.5, 0.5, -1.0, 0.4]));
    }

    #[test]
    fn render_applies_contrast() {
        let c = Color::new((0.5, -0.25, 1.0), Space::Rgb).with_contrast(2.0);
        let rendered = c.render(Space::Rgb).and_then(|v| v.components());
        assert_eq!(rendered, Some(Components(1.0, -0.5, 1.0)));
        // The color itself is unchanged.
        assert_eq!(c.rgb(), Some(Components(0.5, -0.25, 1.0)));

        let c = Color::new((0.5, 0.0, 0.0), Space::Rgb).with_contrast(-1.0);
        assert_eq!(
            c.render(Space::Rgb255).and_then(|v| v.components()),
            Some(Components(64.0, 128.0, 128.0))
        );
    }

    #[test]
    fn readable_contrasts() {
        let text = Color::new("black", None).readable(DEFAULT_READABLE_CONTRAST);
        assert!(text.is_valid());
        assert!(text > Color::new("black", None));

        let text = Color::new("white", None).readable(DEFAULT_READABLE_CONTRAST);
        assert!(text < Color::new("white", None));

        assert!(!Color::default().readable(0.5).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(Color::new("red", None).to_string(), "red");
        assert_eq!(
            Color::new((0.123, 0.456, -0.789), Space::Rgb).to_string(),
            "(0.12, 0.46, -0.79, 1)"
        );
    }

    #[test]
    fn copy_is_independent() {
        let a = Color::new("red", None);
        let mut b = a.copy();
        b.set_named("blue");
        assert_eq!(a.named().as_deref(), Some("red"));
        assert_eq!(b.named().as_deref(), Some("blue"));
    }
}
