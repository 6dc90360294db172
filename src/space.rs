//! Registry of the supported color spaces: how many values each takes, the
//! range of each channel and how a raw value is matched against them.

use bitflags::bitflags;
use tracing::{debug, warn};

use crate::color::{Component, Space};
use crate::error::{ColorError, ColorResult};
use crate::named;
use crate::value::{parse_hex, RawValue};

bitflags! {
    /// Properties of a color space.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SpaceFlags : u8 {
        /// Values are strings.
        const TEXTUAL = 1 << 0;
        /// Values carry an alpha channel.
        const ALPHA = 1 << 1;
        /// Color channels are whole numbers.
        const INTEGER = 1 << 2;
        /// Only available on an advanced color.
        const ADVANCED = 1 << 3;
    }
}

/// The range a single numeric channel accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelRange {
    /// Smallest accepted value.
    pub min: Component,
    /// Largest accepted value.
    pub max: Component,
    /// Whether the value has to be a whole number.
    pub whole: bool,
}

impl ChannelRange {
    const fn new(min: Component, max: Component) -> Self {
        Self {
            min,
            max,
            whole: false,
        }
    }

    const fn whole(min: Component, max: Component) -> Self {
        Self {
            min,
            max,
            whole: true,
        }
    }

    /// Whether `value` is a finite number in range.
    pub fn contains(&self, value: Component) -> bool {
        value.is_finite()
            && value >= self.min
            && value <= self.max
            && (!self.whole || value.fract() == 0.0)
    }
}

const SIGNED: ChannelRange = ChannelRange::new(-1.0, 1.0);
const UNIT: ChannelRange = ChannelRange::new(0.0, 1.0);
const BYTE: ChannelRange = ChannelRange::whole(0.0, 255.0);
const HUE: ChannelRange = ChannelRange::new(0.0, 360.0);
const ANY: ChannelRange = ChannelRange::new(Component::MIN, Component::MAX);

/// Describes the shape of values in a color space.
#[derive(Clone, Copy, Debug)]
pub struct SpaceDescriptor {
    /// The space described.
    pub space: Space,
    /// Number of values, including alpha. Textual spaces take one value.
    pub arity: usize,
    /// Range of each numeric channel; empty for textual spaces.
    pub channels: &'static [ChannelRange],
    /// Properties of the space.
    pub flags: SpaceFlags,
}

macro_rules! descriptor {
    ($space:ident, [$($channel:expr),*], $flags:expr) => {
        SpaceDescriptor {
            space: Space::$space,
            arity: [$($channel),*].len(),
            channels: &[$($channel),*],
            flags: $flags,
        }
    };
    ($space:ident, text, $flags:expr) => {
        SpaceDescriptor {
            space: Space::$space,
            arity: 1,
            channels: &[],
            flags: $flags.union(SpaceFlags::TEXTUAL),
        }
    };
}

const NONE: SpaceFlags = SpaceFlags::empty();
const ALPHA: SpaceFlags = SpaceFlags::ALPHA;
const INTEGER: SpaceFlags = SpaceFlags::INTEGER;
const ADVANCED: SpaceFlags = SpaceFlags::ADVANCED;

/// Descriptors of all spaces, indexed by `Space as usize`.
static DESCRIPTORS: [SpaceDescriptor; 21] = [
    descriptor!(Named, text, NONE),
    descriptor!(Hex, text, NONE),
    descriptor!(Hexa, text, ALPHA),
    descriptor!(Rgb, [SIGNED, SIGNED, SIGNED], NONE),
    descriptor!(Rgba, [SIGNED, SIGNED, SIGNED, UNIT], ALPHA),
    descriptor!(Rgb1, [UNIT, UNIT, UNIT], NONE),
    descriptor!(Rgba1, [UNIT, UNIT, UNIT, UNIT], ALPHA),
    descriptor!(Rgb255, [BYTE, BYTE, BYTE], INTEGER),
    descriptor!(Rgba255, [BYTE, BYTE, BYTE, UNIT], INTEGER.union(ALPHA)),
    descriptor!(Hsv, [HUE, UNIT, UNIT], NONE),
    descriptor!(Hsva, [HUE, UNIT, UNIT, UNIT], ALPHA),
    descriptor!(SrgbTf, [SIGNED, SIGNED, SIGNED], ADVANCED),
    descriptor!(SrgbTfa, [SIGNED, SIGNED, SIGNED, UNIT], ADVANCED.union(ALPHA)),
    descriptor!(Rec709Tf, [SIGNED, SIGNED, SIGNED], ADVANCED),
    descriptor!(Rec709Tfa, [SIGNED, SIGNED, SIGNED, UNIT], ADVANCED.union(ALPHA)),
    descriptor!(Lms, [SIGNED, SIGNED, SIGNED], ADVANCED),
    descriptor!(Lmsa, [SIGNED, SIGNED, SIGNED, UNIT], ADVANCED.union(ALPHA)),
    descriptor!(Dkl, [ANY, ANY, ANY], ADVANCED),
    descriptor!(Dkla, [ANY, ANY, ANY, UNIT], ADVANCED.union(ALPHA)),
    descriptor!(DklCart, [ANY, ANY, ANY], ADVANCED),
    descriptor!(DklaCart, [ANY, ANY, ANY, UNIT], ADVANCED.union(ALPHA)),
];

/// Return the descriptor of `space`.
pub fn descriptor(space: Space) -> &'static SpaceDescriptor {
    &DESCRIPTORS[space as usize]
}

/// Whether `raw` is a valid value in `space`.
pub fn validate(raw: &RawValue, space: Space) -> bool {
    let descriptor = descriptor(space);

    match raw {
        RawValue::None => false,
        RawValue::Text(text) => match space {
            Space::Named => named::lookup(text).is_some(),
            Space::Hex => parse_hex(text, 6).is_some(),
            Space::Hexa => parse_hex(text, 8).is_some(),
            _ => false,
        },
        RawValue::Tuple(values) => {
            !descriptor.flags.contains(SpaceFlags::TEXTUAL)
                && values.len() == descriptor.arity
                && values
                    .iter()
                    .zip(descriptor.channels)
                    .all(|(value, range)| range.contains(*value))
        }
    }
}

/// Return every space `raw` is valid in, in priority order. A value that
/// matches a color name matches nothing else.
pub fn match_spaces(raw: &RawValue) -> Vec<Space> {
    if validate(raw, Space::Named) {
        return vec![Space::Named];
    }

    Space::ALL
        .into_iter()
        .filter(|space| validate(raw, *space))
        .collect()
}

/// Return every space `raw` could be in. Meant for diagnostics.
pub fn detect_candidates(raw: &RawValue) -> Vec<Space> {
    let candidates = match_spaces(raw);
    debug!(
        "Candidate spaces for {}: {}",
        raw,
        candidates
            .iter()
            .map(Space::name)
            .collect::<Vec<_>>()
            .join(", ")
    );
    candidates
}

/// Return the highest priority space `raw` is valid in.
pub fn detect_unique(raw: &RawValue) -> ColorResult<Space> {
    match_spaces(raw)
        .first()
        .copied()
        .ok_or_else(|| ColorError::Unresolvable(raw.to_string()))
}

/// Decide which space to read `raw` in. A declared space is used when the
/// value is valid in it; otherwise the mismatch is logged and the space is
/// detected among the spaces `accepts` allows.
pub fn resolve(
    raw: &RawValue,
    declared: Option<Space>,
    accepts: impl Fn(Space) -> bool,
) -> ColorResult<Space> {
    if let Some(space) = declared {
        if validate(raw, space) {
            return if accepts(space) {
                Ok(space)
            } else {
                Err(ColorError::UnsupportedSpace(space))
            };
        }
        if !matches!(raw, RawValue::None) {
            warn!("{} is not a valid {} value, detecting its space", raw, space);
        }
    }

    let space = match_spaces(raw)
        .into_iter()
        .find(|space| accepts(*space))
        .ok_or_else(|| ColorError::Unresolvable(raw.to_string()))?;
    debug!("Detected {} as {}", raw, space);
    Ok(space)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(values: &[Component]) -> RawValue {
        RawValue::from(values)
    }

    #[test]
    fn descriptors_are_indexed_by_space() {
        for space in Space::ALL {
            let descriptor = descriptor(space);
            assert_eq!(descriptor.space, space);
            assert_eq!(descriptor.flags.contains(SpaceFlags::ALPHA), space.has_alpha());
            assert_eq!(
                descriptor.flags.contains(SpaceFlags::ADVANCED),
                space.is_advanced()
            );
        }
    }

    #[test]
    fn arity_is_checked() {
        assert!(validate(&tuple(&[0.0, 0.0, 0.0]), Space::Rgb));
        assert!(!validate(&tuple(&[0.0, 0.0, 0.0, 1.0]), Space::Rgb));
        assert!(validate(&tuple(&[0.0, 0.0, 0.0, 1.0]), Space::Rgba));
        assert!(!validate(&tuple(&[0.0, 0.0]), Space::Rgb));
    }

    #[test]
    fn ranges_are_checked() {
        assert!(!validate(&tuple(&[1.5, 0.0, 0.0]), Space::Rgb));
        assert!(!validate(&tuple(&[-0.5, 0.0, 0.0]), Space::Rgb1));
        assert!(validate(&tuple(&[255.0, 0.0, 128.0]), Space::Rgb255));
        assert!(!validate(&tuple(&[255.5, 0.0, 128.0]), Space::Rgb255));
        assert!(!validate(&tuple(&[128.5, 0.0, 0.0]), Space::Rgb255));
        assert!(validate(&tuple(&[242.0, 84.0, 91.0, 0.5]), Space::Rgba255));
        assert!(!validate(&tuple(&[242.0, 84.0, 91.0, 30.0]), Space::Rgba255));
        assert!(validate(&tuple(&[357.0, 0.65, 0.95]), Space::Hsv));
        assert!(!validate(&tuple(&[361.0, 0.65, 0.95]), Space::Hsv));
        assert!(validate(&tuple(&[-30.0, 400.0, 2.0]), Space::Dkl));
    }

    #[test]
    fn non_finite_values_never_validate() {
        for space in [Space::Rgb, Space::Dkl, Space::DklCart] {
            assert!(!validate(&tuple(&[Component::NAN, 0.0, 0.0]), space));
            assert!(!validate(&tuple(&[Component::INFINITY, 0.0, 0.0]), space));
        }
    }

    #[test]
    fn textual_spaces() {
        assert!(validate(&RawValue::from("Red"), Space::Named));
        assert!(validate(&RawValue::from("#F2545B"), Space::Hex));
        assert!(!validate(&RawValue::from("#F2545B"), Space::Hexa));
        assert!(validate(&RawValue::from("#F2545B1E"), Space::Hexa));
        assert!(!validate(&RawValue::from("red"), Space::Rgb));
        assert!(!validate(&tuple(&[1.0, 0.0, 0.0]), Space::Named));
        assert!(!validate(&RawValue::None, Space::Named));
    }

    #[test]
    fn names_exclude_other_spaces() {
        assert_eq!(match_spaces(&RawValue::from("white")), vec![Space::Named]);
        assert_eq!(match_spaces(&RawValue::from("#ffffff")), vec![Space::Hex]);
    }

    #[test]
    fn candidates_in_priority_order() {
        let candidates = detect_candidates(&tuple(&[0.0, 0.5, 1.0]));
        assert_eq!(
            candidates,
            vec![
                Space::Rgb,
                Space::Rgb1,
                Space::Hsv,
                Space::SrgbTf,
                Space::Rec709Tf,
                Space::Lms,
                Space::Dkl,
                Space::DklCart,
            ]
        );
        assert_eq!(detect_unique(&tuple(&[0.0, 0.5, 1.0])), Ok(Space::Rgb));
        assert_eq!(detect_unique(&tuple(&[0.0, 90.0, 1.0])), Ok(Space::Rgb255));
    }

    #[test]
    fn nothing_matches() {
        assert!(matches!(
            detect_unique(&RawValue::from("octarine")),
            Err(ColorError::Unresolvable(_))
        ));
        assert!(detect_candidates(&RawValue::None).is_empty());
    }

    #[test]
    fn declared_space_wins_when_valid() {
        let raw = tuple(&[0.0, 0.5, 1.0]);
        assert_eq!(resolve(&raw, Some(Space::Hsv), |_| true), Ok(Space::Hsv));
        assert_eq!(resolve(&raw, None, |_| true), Ok(Space::Rgb));
    }

    #[test]
    fn invalid_declared_space_falls_back() {
        let raw = tuple(&[242.0, 84.0, 91.0]);
        assert_eq!(resolve(&raw, Some(Space::Rgb), |_| true), Ok(Space::Rgb255));
        assert_eq!(
            resolve(&RawValue::from("red"), Some(Space::Hex), |_| true),
            Ok(Space::Named)
        );
    }

    #[test]
    fn accepted_spaces_limit_detection() {
        let raw = tuple(&[0.0, 90.5, 1.0]);
        assert_eq!(resolve(&raw, None, |_| true), Ok(Space::Dkl));
        assert!(matches!(
            resolve(&raw, None, |space| !space.is_advanced()),
            Err(ColorError::Unresolvable(_))
        ));
        assert_eq!(
            resolve(&raw, Some(Space::Dkl), |space| !space.is_advanced()),
            Err(ColorError::UnsupportedSpace(Space::Dkl))
        );
    }
}
