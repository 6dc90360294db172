//! stimcolor represents colors for visual stimuli and converts them between
//! the notations used to describe them: color names, hex strings, RGB in
//! several ranges, HSV, transfer function encoded RGB and the cone excitation
//! (LMS) and cone opponent (DKL) spaces.
//!
//! ```rust
//! use stimcolor::{Color, Space};
//!
//! let color = Color::new("#F2545B", Space::Hex);
//! assert_eq!(color.rgb255(), Some([242, 84, 91]));
//! assert!(Color::new("black", None) < Color::new("white", None));
//! ```
//!
//! Setting a color never fails. A value that can not be resolved is logged
//! through [`tracing`] and leaves the color unresolved, which
//! [`Color::is_valid`] reports. The `try_` variants return the
//! [`ColorError`] instead.

#![deny(missing_docs)]

mod advanced;
mod color;
mod convert;
mod error;
mod helpers;
pub mod math;
pub mod models;
pub mod named;
pub mod space;
#[cfg(test)]
mod test;
pub mod transfer;
mod value;

pub use advanced::{AdvancedColor, CalibrationMatrix, DEFAULT_DKL_MATRIX, DEFAULT_LMS_MATRIX};
pub use color::{Color, Component, Components, HasSpace, Space, DEFAULT_READABLE_CONTRAST};
pub use error::{ColorError, ColorResult};
#[allow(deprecated)]
pub use helpers::{hex_to_rgb255, is_valid_color};
pub use value::{RawValue, Values};
