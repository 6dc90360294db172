//! Shortcuts kept for callers that predate [`Color`].

use tracing::warn;

use crate::color::{Color, Space};
use crate::value::{RawValue, Values};

/// Whether `value` resolves to a color. `space` defaults to auto-detection.
#[deprecated(note = "build a `Color` and check `Color::is_valid` instead")]
pub fn is_valid_color(value: impl Into<RawValue>, space: impl Into<Option<Space>>) -> bool {
    warn!(
        "is_valid_color is deprecated, build a Color and check Color::is_valid instead. \
         Specify the space for values that are not hex, named or rgb."
    );
    Color::try_new(value, space).is_ok()
}

/// Convert `#rrggbb` to RGB in [0, 255], or `#rrggbbaa` to RGB in [0, 255]
/// followed by alpha in [0, 1].
#[deprecated(note = "use `Color::rgb255` or `Color::rgba255` instead")]
pub fn hex_to_rgb255(hex: &str) -> Option<Values> {
    let digits = hex.trim().trim_start_matches('#').len();
    let space = match digits {
        6 => Space::Hex,
        8 => Space::Hexa,
        _ => return None,
    };

    let color = Color::try_new(hex, space).ok()?;
    color.convert(if digits == 6 {
        Space::Rgb255
    } else {
        Space::Rgba255
    })
}
