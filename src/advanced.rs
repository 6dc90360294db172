//! An [`AdvancedColor`] adds the transfer function and physiological spaces
//! to a [`Color`]. The physiological spaces need a calibration matrix for the
//! display; a generic matrix is used, with a warning, when none is given.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Sub};

use tracing::{error, warn};

use crate::color::{log_conversion, Color, Component, Components, Space};
use crate::convert::{self, Decoded};
use crate::error::{ColorError, ColorResult};
use crate::math::{transform_from_rows, Transform};
use crate::models::{Dkl, DklCart, Lms, Model, Rgb};
use crate::transfer::{Rec709, Srgb, TransferFunction};
use crate::value::{RawValue, Values};

/// Cones to RGB matrix of a generic display, used when no calibration is
/// given.
#[allow(clippy::excessive_precision)]
pub const DEFAULT_LMS_MATRIX: [[Component; 3]; 3] = [
    [4.97068857, -4.14354132, 0.17285275],
    [-0.90913894, 2.15671326, -0.24757432],
    [-0.03976551, -0.14253782, 1.18230333],
];

/// DKL (luminance, L-M, S) to RGB matrix of a generic display, used when no
/// calibration is given.
pub const DEFAULT_DKL_MATRIX: [[Component; 3]; 3] = [
    [1.0, 1.0, -0.1462],
    [1.0, -0.39, 0.2094],
    [1.0, 0.018, -1.0],
];

/// A 3x3 matrix taking cone or DKL coordinates of a display to its RGB.
#[derive(Clone, Debug, PartialEq)]
pub struct CalibrationMatrix {
    rows: [[Component; 3]; 3],
    transform: Transform,
}

impl CalibrationMatrix {
    /// Create a matrix from its rows.
    pub fn from_rows(rows: [[Component; 3]; 3]) -> Self {
        Self {
            rows,
            transform: transform_from_rows(&rows),
        }
    }

    /// The rows of the matrix.
    pub fn rows(&self) -> [[Component; 3]; 3] {
        self.rows
    }

    /// The matrix as a transform to RGB.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The inverse transform, from RGB.
    pub fn inverse(&self) -> ColorResult<Transform> {
        self.transform
            .inverse()
            .ok_or_else(|| ColorError::MatrixError(format!("{:?} is not invertible", self.rows)))
    }
}

/// Pick the matrix for `space`, falling back to the generic one.
fn matrix(calibration: Option<&CalibrationMatrix>, space: Space) -> CalibrationMatrix {
    if let Some(calibration) = calibration {
        return calibration.clone();
    }

    let (name, rows) = if space.base() == Space::Lms {
        (Lms::NAME, DEFAULT_LMS_MATRIX)
    } else {
        ("dkl", DEFAULT_DKL_MATRIX)
    };
    warn!(
        "This monitor has not been color-calibrated, using the default {} conversion matrix",
        name.to_uppercase()
    );
    CalibrationMatrix::from_rows(rows)
}

/// Clip canonical RGB that fell outside [-1, 1].
fn clip(space: Space, rgb: Rgb) -> Rgb {
    let clipped = rgb.clipped();
    if clipped != rgb {
        warn!(
            "{} value is outside the display gamut, clipping {:?}",
            space,
            rgb.to_components()
        );
    }
    clipped
}

fn decode(
    calibration: Option<&CalibrationMatrix>,
    space: Space,
    raw: &RawValue,
) -> ColorResult<Decoded> {
    use Space as S;

    if !space.is_advanced() {
        return convert::decode(space, raw);
    }

    let (c, alpha) = raw.split_alpha().ok_or_else(|| {
        ColorError::InvalidValue(format!("{} is not a valid {} value", raw, space))
    })?;

    let rgb = match space.base() {
        S::SrgbTf => Rgb::from(Srgb::decode_components(&c)),
        S::Rec709Tf => Rgb::from(Rec709::decode_components(&c)),
        S::Lms => Lms::from(c).to_rgb(&matrix(calibration, space).transform()),
        S::Dkl => Dkl::from(c)
            .to_cartesian()
            .to_rgb(&matrix(calibration, space).transform()),
        S::DklCart => DklCart::from(c).to_rgb(&matrix(calibration, space).transform()),
        space => return Err(ColorError::UnsupportedSpace(space)),
    };

    Ok(Decoded {
        franca: clip(space, rgb).to_components(),
        alpha,
    })
}

fn encode(
    calibration: Option<&CalibrationMatrix>,
    space: Space,
    franca: Components,
    alpha: Component,
) -> ColorResult<Values> {
    use Space as S;

    if !space.is_advanced() {
        return convert::encode(space, franca, alpha);
    }

    let rgb = Rgb::from(franca);
    let c = match space.base() {
        S::SrgbTf => Srgb::encode_components(&franca),
        S::Rec709Tf => Rec709::encode_components(&franca),
        S::Lms => Lms::from_rgb(&rgb, &matrix(calibration, space).inverse()?).to_components(),
        S::DklCart => {
            DklCart::from_rgb(&rgb, &matrix(calibration, space).inverse()?).to_components()
        }
        S::Dkl => {
            return Err(ColorError::UnsupportedConversion {
                from: Space::Rgb,
                to: space,
            })
        }
        space => return Err(ColorError::UnsupportedSpace(space)),
    };

    Ok(if space.has_alpha() {
        Values::Quad(c, alpha)
    } else {
        Values::Triple(c)
    })
}

/// A color that can also be read from and written to the transfer function
/// and physiological spaces.
///
/// DKL is one directional: a DKL value can be set, and read back from the
/// same color, but RGB can not be converted to DKL. Cartesian DKL converts
/// both ways.
/// ```rust
/// use stimcolor::{AdvancedColor, Space};
/// let color = AdvancedColor::new((0.0, 90.0, 1.0), Space::Dkl, None);
/// assert!(color.is_valid());
/// assert!(color.dkl().is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AdvancedColor {
    color: Color,
    calibration: Option<CalibrationMatrix>,
}

impl AdvancedColor {
    /// Create a new color from a value in the given space. See
    /// [`Color::new`].
    pub fn new(
        value: impl Into<RawValue>,
        space: impl Into<Option<Space>>,
        calibration: impl Into<Option<CalibrationMatrix>>,
    ) -> Self {
        let mut color = Self {
            color: Color::default(),
            calibration: calibration.into(),
        };
        color.set(value, space);
        color
    }

    /// Like [`AdvancedColor::new`], but return the reason the value could
    /// not be resolved instead of logging it.
    pub fn try_new(
        value: impl Into<RawValue>,
        space: impl Into<Option<Space>>,
        calibration: impl Into<Option<CalibrationMatrix>>,
    ) -> ColorResult<Self> {
        let mut color = Self {
            color: Color::default(),
            calibration: calibration.into(),
        };
        color.try_set(value, space)?;
        Ok(color)
    }

    /// Create a color from a typed model and an alpha value.
    pub fn from_model<M: Model>(
        model: M,
        alpha: Component,
        calibration: impl Into<Option<CalibrationMatrix>>,
    ) -> Self {
        Self::new(model.to_raw(alpha), M::SPACE.with_alpha(), calibration)
    }

    /// Set the color from a value in any space. On failure the error is
    /// logged and the color becomes unresolved.
    pub fn set(&mut self, value: impl Into<RawValue>, space: impl Into<Option<Space>>) {
        let raw = value.into();
        if let Err(err) = self.try_set(raw.clone(), space) {
            error!("Could not set color from {}: {}", raw, err);
        }
    }

    /// Set the color from a value, returning the reason on failure.
    pub fn try_set(
        &mut self,
        value: impl Into<RawValue>,
        space: impl Into<Option<Space>>,
    ) -> ColorResult<()> {
        let raw = value.into().normalized();
        let calibration = self.calibration.as_ref();
        let space = self
            .color
            .try_set_with(&raw, space.into(), |_| true, |space, raw| {
                decode(calibration, space, raw)
            })?;

        if space.base() == Space::Dkl {
            if let Some((dkl, _)) = raw.split_alpha() {
                let alpha = self.color.alpha();
                self.color.cache_insert(Space::Dkl, Values::Triple(dkl));
                self.color.cache_insert(Space::Dkla, Values::Quad(dkl, alpha));
            }
        }
        Ok(())
    }

    /// Set the color from a value in the given space.
    pub fn assign(&mut self, space: Space, value: impl Into<RawValue>) {
        self.set(value, space);
    }

    /// Return the color in `space`, or `None` if it can not be expressed in
    /// that space. Failures are logged.
    pub fn convert(&self, space: Space) -> Option<Values> {
        log_conversion(space, self.try_convert(space))
    }

    /// Return the color in `space`, or the reason it can not be expressed in
    /// that space.
    pub fn try_convert(&self, space: Space) -> ColorResult<Values> {
        let calibration = self.calibration.as_ref();
        self.color
            .try_convert_with(space, |space, franca, alpha| {
                encode(calibration, space, franca, alpha)
            })
    }

    /// Return the value of `space` after applying the contrast of the color.
    pub fn render(&self, space: Space) -> Option<Values> {
        let calibration = self.calibration.as_ref();
        let result = self.color.rendered().and_then(|buffer| {
            buffer.try_convert_with(space, |space, franca, alpha| {
                encode(calibration, space, franca, alpha)
            })
        });
        log_conversion(space, result)
    }

    /// The calibration matrix, if one was given.
    pub fn calibration(&self) -> Option<&CalibrationMatrix> {
        self.calibration.as_ref()
    }

    /// Replace the calibration matrix. Cached values are dropped.
    pub fn set_calibration(&mut self, calibration: impl Into<Option<CalibrationMatrix>>) {
        self.calibration = calibration.into();
        self.color.clear_cache();
    }

    /// Set the alpha of the color, clamped to [0, 1].
    pub fn set_alpha(&mut self, alpha: Component) {
        self.color.set_alpha(alpha);
    }

    /// Set the contrast factor used by [`AdvancedColor::render`].
    pub fn set_contrast(&mut self, contrast: Component) {
        self.color.set_contrast(contrast);
    }

    /// Return an independent copy, keeping the calibration and any DKL
    /// value the color was set from.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// The underlying basic color.
    pub fn into_color(self) -> Color {
        self.color
    }

    fn triple(&self, space: Space) -> Option<Components> {
        self.convert(space).and_then(|v| v.components())
    }

    fn quad(&self, space: Space) -> Option<[Component; 4]> {
        self.convert(space).and_then(|v| v.to_quad())
    }

    /// RGB encoded with the sRGB transfer function.
    pub fn srgb_tf(&self) -> Option<Components> {
        self.triple(Space::SrgbTf)
    }

    /// [`AdvancedColor::srgb_tf`] followed by alpha.
    pub fn srgb_tfa(&self) -> Option<[Component; 4]> {
        self.quad(Space::SrgbTfa)
    }

    /// RGB encoded with the Rec. 709 transfer function.
    pub fn rec709_tf(&self) -> Option<Components> {
        self.triple(Space::Rec709Tf)
    }

    /// [`AdvancedColor::rec709_tf`] followed by alpha.
    pub fn rec709_tfa(&self) -> Option<[Component; 4]> {
        self.quad(Space::Rec709Tfa)
    }

    /// Cone excitation.
    pub fn lms(&self) -> Option<Components> {
        self.triple(Space::Lms)
    }

    /// [`AdvancedColor::lms`] followed by alpha.
    pub fn lmsa(&self) -> Option<[Component; 4]> {
        self.quad(Space::Lmsa)
    }

    /// DKL in spherical coordinates. Only available when the color was set
    /// from DKL.
    pub fn dkl(&self) -> Option<Components> {
        self.triple(Space::Dkl)
    }

    /// [`AdvancedColor::dkl`] followed by alpha.
    pub fn dkla(&self) -> Option<[Component; 4]> {
        self.quad(Space::Dkla)
    }

    /// DKL in cartesian coordinates.
    pub fn dkl_cart(&self) -> Option<Components> {
        self.triple(Space::DklCart)
    }

    /// [`AdvancedColor::dkl_cart`] followed by alpha.
    pub fn dkla_cart(&self) -> Option<[Component; 4]> {
        self.quad(Space::DklaCart)
    }
}

crate::color::basic_setters!(AdvancedColor);

crate::color::setters! {
    AdvancedColor {
        /// Set from sRGB encoded RGB.
        set_srgb_tf => SrgbTf,
        /// Set from sRGB encoded RGB with alpha.
        set_srgb_tfa => SrgbTfa,
        /// Set from Rec. 709 encoded RGB.
        set_rec709_tf => Rec709Tf,
        /// Set from Rec. 709 encoded RGB with alpha.
        set_rec709_tfa => Rec709Tfa,
        /// Set from cone excitation.
        set_lms => Lms,
        /// Set from cone excitation with alpha.
        set_lmsa => Lmsa,
        /// Set from spherical DKL.
        set_dkl => Dkl,
        /// Set from spherical DKL with alpha.
        set_dkla => Dkla,
        /// Set from cartesian DKL.
        set_dkl_cart => DklCart,
        /// Set from cartesian DKL with alpha.
        set_dkla_cart => DklaCart,
    }
}

impl Deref for AdvancedColor {
    type Target = Color;

    fn deref(&self) -> &Color {
        &self.color
    }
}

impl From<AdvancedColor> for Color {
    fn from(color: AdvancedColor) -> Self {
        color.into_color()
    }
}

impl PartialEq for AdvancedColor {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl PartialEq<Color> for AdvancedColor {
    fn eq(&self, other: &Color) -> bool {
        &self.color == other
    }
}

impl PartialOrd for AdvancedColor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.color.partial_cmp(&other.color)
    }
}

impl Add for &AdvancedColor {
    type Output = AdvancedColor;

    /// Mix two colors as [`Color`] does. The result keeps the calibration
    /// of the left color.
    fn add(self, other: &AdvancedColor) -> AdvancedColor {
        AdvancedColor {
            color: &self.color + &other.color,
            calibration: self.calibration.clone(),
        }
    }
}

impl Add for AdvancedColor {
    type Output = AdvancedColor;

    fn add(self, other: AdvancedColor) -> AdvancedColor {
        &self + &other
    }
}

impl Sub for &AdvancedColor {
    type Output = AdvancedColor;

    /// Subtract canonical RGB as [`Color`] does, keeping the alpha and
    /// calibration of the left color.
    fn sub(self, other: &AdvancedColor) -> AdvancedColor {
        AdvancedColor {
            color: &self.color - &other.color,
            calibration: self.calibration.clone(),
        }
    }
}

impl Sub for AdvancedColor {
    type Output = AdvancedColor;

    fn sub(self, other: AdvancedColor) -> AdvancedColor {
        &self - &other
    }
}

impl fmt::Display for AdvancedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.color, f)
    }
}
