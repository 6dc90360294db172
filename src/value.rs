//! Raw input values and converted output values.

use std::fmt;

use crate::color::{Component, Components};

/// A value as handed to a [`Color`](crate::Color) before its color space is
/// known. Any of the `From` implementations can be passed where an
/// `impl Into<RawValue>` is expected.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RawValue {
    /// No value at all.
    #[default]
    None,
    /// A name, a hex string or a textual tuple such as `"(1, 0, 0)"`.
    Text(String),
    /// A sequence of numbers.
    Tuple(Vec<Component>),
}

impl RawValue {
    /// Strip quotes and whitespace from text values and turn textual tuples
    /// into numeric tuples. Empty text becomes [`RawValue::None`] and a
    /// single number stands for all three channels.
    pub fn normalized(&self) -> RawValue {
        match self {
            RawValue::Text(text) => {
                let text = text.trim().trim_matches(|c| c == '"' || c == '\'').trim();
                if text.is_empty() {
                    RawValue::None
                } else if let Some(values) = parse_tuple(text) {
                    RawValue::Tuple(values).normalized()
                } else {
                    RawValue::Text(text.to_string())
                }
            }
            RawValue::Tuple(values) if values.len() == 1 => RawValue::Tuple(vec![values[0]; 3]),
            other => other.clone(),
        }
    }

    /// Return the text of the value, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Return the numbers of the value, if it is a tuple.
    pub fn as_tuple(&self) -> Option<&[Component]> {
        match self {
            RawValue::Tuple(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Split a tuple into its first three channels and an optional fourth
    /// (alpha) channel.
    pub fn split_alpha(&self) -> Option<(Components, Option<Component>)> {
        match self.as_tuple()? {
            [c0, c1, c2] => Some((Components(*c0, *c1, *c2), None)),
            [c0, c1, c2, alpha] => Some((Components(*c0, *c1, *c2), Some(*alpha))),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::None => write!(f, "None"),
            RawValue::Text(text) => write!(f, "{:?}", text),
            RawValue::Tuple(values) => {
                write!(f, "(")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Parse a textual tuple like `"[r, g, b]"` or `"(r, g, b, a)"`.
fn parse_tuple(text: &str) -> Option<Vec<Component>> {
    let inner = text
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .or_else(|| text.strip_prefix('(').and_then(|t| t.strip_suffix(')')))?;

    inner
        .split(',')
        .map(|part| part.trim().parse::<Component>().ok())
        .collect()
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<&String> for RawValue {
    fn from(value: &String) -> Self {
        RawValue::Text(value.clone())
    }
}

impl From<Component> for RawValue {
    fn from(value: Component) -> Self {
        RawValue::Tuple(vec![value])
    }
}

impl From<Components> for RawValue {
    fn from(value: Components) -> Self {
        RawValue::Tuple(vec![value.0, value.1, value.2])
    }
}

impl From<[Component; 3]> for RawValue {
    fn from(value: [Component; 3]) -> Self {
        RawValue::Tuple(value.to_vec())
    }
}

impl From<[Component; 4]> for RawValue {
    fn from(value: [Component; 4]) -> Self {
        RawValue::Tuple(value.to_vec())
    }
}

impl From<[u8; 3]> for RawValue {
    fn from(value: [u8; 3]) -> Self {
        RawValue::Tuple(value.iter().map(|&c| c as Component).collect())
    }
}

impl From<(Component, Component, Component)> for RawValue {
    fn from((c0, c1, c2): (Component, Component, Component)) -> Self {
        RawValue::Tuple(vec![c0, c1, c2])
    }
}

impl From<(Component, Component, Component, Component)> for RawValue {
    fn from((c0, c1, c2, alpha): (Component, Component, Component, Component)) -> Self {
        RawValue::Tuple(vec![c0, c1, c2, alpha])
    }
}

impl From<(i32, i32, i32)> for RawValue {
    fn from((c0, c1, c2): (i32, i32, i32)) -> Self {
        RawValue::Tuple(vec![c0 as Component, c1 as Component, c2 as Component])
    }
}

impl From<(i32, i32, i32, Component)> for RawValue {
    fn from((c0, c1, c2, alpha): (i32, i32, i32, Component)) -> Self {
        RawValue::Tuple(vec![c0 as Component, c1 as Component, c2 as Component, alpha])
    }
}

impl From<Vec<Component>> for RawValue {
    fn from(value: Vec<Component>) -> Self {
        RawValue::Tuple(value)
    }
}

impl From<&[Component]> for RawValue {
    fn from(value: &[Component]) -> Self {
        RawValue::Tuple(value.to_vec())
    }
}

impl From<Values> for RawValue {
    fn from(value: Values) -> Self {
        match value {
            Values::Text(text) => RawValue::Text(text),
            Values::Triple(c) => c.into(),
            Values::Quad(c, alpha) => RawValue::Tuple(vec![c.0, c.1, c.2, alpha]),
        }
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::None, Into::into)
    }
}

/// A color expressed in one color space, as returned by
/// [`Color::convert`](crate::Color::convert).
#[derive(Clone, Debug, PartialEq)]
pub enum Values {
    /// Text such as a name or hex string.
    Text(String),
    /// Three channels.
    Triple(Components),
    /// Three channels followed by alpha.
    Quad(Components, Component),
}

impl Values {
    /// Return the text, if these values are text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Values::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Return the first three channels, dropping alpha.
    pub fn components(&self) -> Option<Components> {
        match self {
            Values::Text(_) => None,
            Values::Triple(c) | Values::Quad(c, _) => Some(*c),
        }
    }

    /// Return all four channels, if alpha is present.
    pub fn to_quad(&self) -> Option<[Component; 4]> {
        match self {
            Values::Quad(c, alpha) => Some([c.0, c.1, c.2, *alpha]),
            _ => None,
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Values::Text(_) => 1,
            Values::Triple(_) => 3,
            Values::Quad(..) => 4,
        }
    }

    /// Values are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Values::Text(text) => write!(f, "{}", text),
            Values::Triple(c) => write!(f, "({}, {}, {})", c.0, c.1, c.2),
            Values::Quad(c, alpha) => write!(f, "({}, {}, {}, {})", c.0, c.1, c.2, alpha),
        }
    }
}

/// Parse `#RRGGBB` (`digits == 6`) or `#RRGGBBAA` (`digits == 8`) into bytes.
/// Digits may be upper or lower case.
pub fn parse_hex(text: &str, digits: usize) -> Option<Vec<u8>> {
    let hex = text.strip_prefix('#')?;
    if hex.len() != digits || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    (0..digits)
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}

/// Format bytes as a lowercase hex string prefixed with `#`.
pub fn format_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(1 + bytes.len() * 2);
    hex.push('#');
    for byte in bytes {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textual_tuples_are_parsed() {
        assert_eq!(
            RawValue::from("[1, 0.5, -1]").normalized(),
            RawValue::Tuple(vec![1.0, 0.5, -1.0])
        );
        assert_eq!(
            RawValue::from(" (255,0, 0, 0.5) ").normalized(),
            RawValue::Tuple(vec![255.0, 0.0, 0.0, 0.5])
        );
        assert_eq!(
            RawValue::from("'(1,1,1)'").normalized(),
            RawValue::Tuple(vec![1.0, 1.0, 1.0])
        );
    }

    #[test]
    fn malformed_tuples_stay_text() {
        assert_eq!(
            RawValue::from("(1, two, 3)").normalized(),
            RawValue::Text("(1, two, 3)".to_string())
        );
        assert_eq!(
            RawValue::from("[1, 2, 3)").normalized(),
            RawValue::Text("[1, 2, 3)".to_string())
        );
    }

    #[test]
    fn empty_text_is_none() {
        assert_eq!(RawValue::from("").normalized(), RawValue::None);
        assert_eq!(RawValue::from("  ''  ").normalized(), RawValue::None);
        assert_eq!(RawValue::from(None::<&str>), RawValue::None);
    }

    #[test]
    fn single_value_fills_all_channels() {
        assert_eq!(
            RawValue::from(0.5).normalized(),
            RawValue::Tuple(vec![0.5, 0.5, 0.5])
        );
        assert_eq!(
            RawValue::from("[-1]").normalized(),
            RawValue::Tuple(vec![-1.0, -1.0, -1.0])
        );
    }

    #[test]
    fn names_are_unquoted() {
        assert_eq!(
            RawValue::from("\"red\"").normalized(),
            RawValue::Text("red".to_string())
        );
    }

    #[test]
    fn split_alpha() {
        let (c, alpha) = RawValue::from((1.0, 0.0, -1.0)).split_alpha().unwrap();
        assert_eq!(c, Components(1.0, 0.0, -1.0));
        assert_eq!(alpha, None);

        let (_, alpha) = RawValue::from((255, 0, 0, 0.5)).split_alpha().unwrap();
        assert_eq!(alpha, Some(0.5));

        assert!(RawValue::from("red").split_alpha().is_none());
        assert!(RawValue::from(vec![1.0, 2.0]).split_alpha().is_none());
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex("#F2545B", 6), Some(vec![242, 84, 91]));
        assert_eq!(parse_hex("#f2545b1e", 8), Some(vec![242, 84, 91, 30]));
        assert_eq!(parse_hex("F2545B", 6), None);
        assert_eq!(parse_hex("#F2545", 6), None);
        assert_eq!(parse_hex("#F2545G", 6), None);
        assert_eq!(parse_hex("#F2545B", 8), None);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(format_hex(&[255, 0, 0]), "#ff0000");
        assert_eq!(format_hex(&[2, 169, 234, 30]), "#02a9ea1e");
    }

    #[test]
    fn values_accessors() {
        let values = Values::Quad(Components(0.1, 0.2, 0.3), 0.4);
        assert_eq!(values.len(), 4);
        assert_eq!(values.components(), Some(Components(0.1, 0.2, 0.3)));
        assert_eq!(values.to_quad(), Some([0.1, 0.2, 0.3, 0.4]));
        assert_eq!(Values::Text("#ffffff".into()).as_text(), Some("#ffffff"));
    }
}
