//! Error types for color resolution and conversion.

use thiserror::Error;

use crate::color::Space;

/// Result type for fallible color operations.
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors that can occur while resolving or converting a color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The color has no canonical value.
    #[error("color is unresolved")]
    Unresolved,

    /// The raw value does not match any registered space.
    #[error("could not resolve a color space for {0}")]
    Unresolvable(String),

    /// The space is not available on this kind of color.
    #[error("color space `{0}` is not supported here")]
    UnsupportedSpace(Space),

    /// The conversion exists in one direction only.
    #[error("conversion from `{from}` to `{to}` is not supported")]
    UnsupportedConversion {
        /// Space the color is held in.
        from: Space,
        /// Requested space.
        to: Space,
    },

    /// The color does not match any entry in the named color table.
    #[error("color has no name")]
    Unnamed,

    /// A calibration matrix could not be used.
    #[error("matrix error: {0}")]
    MatrixError(String),

    /// A value was rejected.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A space name was not recognized.
    #[error("unknown color space `{0}`")]
    UnknownSpace(String),
}
