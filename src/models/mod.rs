//! Typed models for the numeric color spaces. Each model holds the three
//! channels of one space and implements the conversions that start from it.
//!
//! ```rust
//! use stimcolor::models::{Hsv, Rgb};
//! let rgb1 = Rgb::new(0.89, -0.35, -0.28).to_rgb1();
//! let hsv: Hsv = rgb1.to_hsv();
//! assert_eq!(hsv.hue, 357.0);
//! ```

use crate::color::{Component, HasSpace};
use crate::value::RawValue;

mod cone;
mod hsv;
mod rgb;

pub use cone::{Dkl, DklCart, Lms};
pub use hsv::Hsv;
pub use rgb::{Rgb, Rgb1, Rgb255};

/// A trait implemented for color models that can be turned into a color.
pub trait Model: HasSpace {
    /// The channels of the model followed by `alpha`, ready to be set on a
    /// color in the alpha variant of the model's space.
    fn to_raw(&self, alpha: Component) -> RawValue;
}
