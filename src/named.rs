//! The table of named colors.
//!
//! Every entry stores the canonical RGB value of the color (each channel in
//! [-1, 1]) together with its alpha. Only `none` and `transparent` carry an
//! alpha of 0.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::color::{Component, Components};
use crate::math::round_to;

/// A single entry of the named color table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NamedColor {
    /// Lowercase name of the color.
    pub name: &'static str,
    /// Canonical RGB value of the color.
    pub rgb: Components,
    /// Alpha of the color.
    pub alpha: Component,
}

impl NamedColor {
    const fn new(
        name: &'static str,
        red: Component,
        green: Component,
        blue: Component,
        alpha: Component,
    ) -> Self {
        Self {
            name,
            rgb: Components(red, green, blue),
            alpha,
        }
    }

    /// Return the RGBA value of the entry.
    pub fn rgba(&self) -> [Component; 4] {
        [self.rgb.0, self.rgb.1, self.rgb.2, self.alpha]
    }
}

/// The name which makes a color fully transparent when assigned.
pub const NONE: &str = "none";

/// All named colors. Order matters for reverse lookups: the first entry
/// matching a value wins.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub static NAMED_COLORS: &[NamedColor] = &[
    NamedColor::new("none", 0.0, 0.0, 0.0, 0.0),
    NamedColor::new("transparent", 0.0, 0.0, 0.0, 0.0),
    NamedColor::new("aliceblue", 0.882352941176471, 0.945098039215686, 1.0, 1.0),
    NamedColor::new("antiquewhite", 0.96078431372549, 0.843137254901961, 0.686274509803922, 1.0),
    NamedColor::new("aqua", -1.0, 1.0, 1.0, 1.0),
    NamedColor::new("aquamarine", -0.00392156862745097, 1.0, 0.662745098039216, 1.0),
    NamedColor::new("azure", 0.882352941176471, 1.0, 1.0, 1.0),
    NamedColor::new("beige", 0.92156862745098, 0.92156862745098, 0.725490196078431, 1.0),
    NamedColor::new("bisque", 1.0, 0.788235294117647, 0.537254901960784, 1.0),
    NamedColor::new("black", -1.0, -1.0, -1.0, 1.0),
    NamedColor::new("blanchedalmond", 1.0, 0.843137254901961, 0.607843137254902, 1.0),
    NamedColor::new("blue", -1.0, -1.0, 1.0, 1.0),
    NamedColor::new("blueviolet", 0.0823529411764705, -0.662745098039216, 0.772549019607843, 1.0),
    NamedColor::new("brown", 0.294117647058824, -0.670588235294118, -0.670588235294118, 1.0),
    NamedColor::new("burlywood", 0.741176470588235, 0.443137254901961, 0.0588235294117647, 1.0),
    NamedColor::new("cadetblue", -0.254901960784314, 0.23921568627451, 0.254901960784314, 1.0),
    NamedColor::new("chartreuse", -0.00392156862745097, 1.0, -1.0, 1.0),
    NamedColor::new("chestnut", 0.607843137254902, -0.27843137254902, -0.27843137254902, 1.0),
    NamedColor::new("chocolate", 0.647058823529412, -0.176470588235294, -0.764705882352941, 1.0),
    NamedColor::new("coral", 1.0, -0.00392156862745097, -0.372549019607843, 1.0),
    NamedColor::new("cornflowerblue", -0.215686274509804, 0.168627450980392, 0.858823529411765, 1.0),
    NamedColor::new("cornsilk", 1.0, 0.945098039215686, 0.725490196078431, 1.0),
    NamedColor::new("crimson", 0.725490196078431, -0.843137254901961, -0.529411764705882, 1.0),
    NamedColor::new("cyan", -1.0, 1.0, 1.0, 1.0),
    NamedColor::new("darkblue", -1.0, -1.0, 0.0901960784313725, 1.0),
    NamedColor::new("darkcyan", -1.0, 0.0901960784313725, 0.0901960784313725, 1.0),
    NamedColor::new("darkgoldenrod", 0.443137254901961, 0.0509803921568628, -0.913725490196078, 1.0),
    NamedColor::new("darkgray", 0.325490196078431, 0.325490196078431, 0.325490196078431, 1.0),
    NamedColor::new("darkgreen", -1.0, -0.215686274509804, -1.0, 1.0),
    NamedColor::new("darkgrey", 0.325490196078431, 0.325490196078431, 0.325490196078431, 1.0),
    NamedColor::new("darkkhaki", 0.482352941176471, 0.435294117647059, -0.16078431372549, 1.0),
    NamedColor::new("darkmagenta", 0.0901960784313725, -1.0, 0.0901960784313725, 1.0),
    NamedColor::new("darkolivegreen", -0.333333333333333, -0.16078431372549, -0.631372549019608, 1.0),
    NamedColor::new("darkorange", 1.0, 0.0980392156862746, -1.0, 1.0),
    NamedColor::new("darkorchid", 0.2, -0.607843137254902, 0.6, 1.0),
    NamedColor::new("darkred", 0.0901960784313725, -1.0, -1.0, 1.0),
    NamedColor::new("darksalmon", 0.827450980392157, 0.176470588235294, -0.0431372549019607, 1.0),
    NamedColor::new("darkseagreen", 0.12156862745098, 0.474509803921569, 0.12156862745098, 1.0),
    NamedColor::new("darkslateblue", -0.435294117647059, -0.52156862745098, 0.0901960784313725, 1.0),
    NamedColor::new("darkslategray", -0.631372549019608, -0.380392156862745, -0.380392156862745, 1.0),
    NamedColor::new("darkslategrey", -0.631372549019608, -0.380392156862745, -0.380392156862745, 1.0),
    NamedColor::new("darkturquoise", -1.0, 0.615686274509804, 0.63921568627451, 1.0),
    NamedColor::new("darkviolet", 0.16078431372549, -1.0, 0.654901960784314, 1.0),
    NamedColor::new("deeppink", 1.0, -0.843137254901961, 0.152941176470588, 1.0),
    NamedColor::new("deepskyblue", -1.0, 0.498039215686275, 1.0, 1.0),
    NamedColor::new("dimgray", -0.176470588235294, -0.176470588235294, -0.176470588235294, 1.0),
    NamedColor::new("dimgrey", -0.176470588235294, -0.176470588235294, -0.176470588235294, 1.0),
    NamedColor::new("dodgerblue", -0.764705882352941, 0.129411764705882, 1.0, 1.0),
    NamedColor::new("firebrick", 0.396078431372549, -0.733333333333333, -0.733333333333333, 1.0),
    NamedColor::new("floralwhite", 1.0, 0.96078431372549, 0.882352941176471, 1.0),
    NamedColor::new("forestgreen", -0.733333333333333, 0.0901960784313725, -0.733333333333333, 1.0),
    NamedColor::new("fuchsia", 1.0, -1.0, 1.0, 1.0),
    NamedColor::new("gainsboro", 0.725490196078431, 0.725490196078431, 0.725490196078431, 1.0),
    NamedColor::new("ghostwhite", 0.945098039215686, 0.945098039215686, 1.0, 1.0),
    NamedColor::new("gold", 1.0, 0.686274509803922, -1.0, 1.0),
    NamedColor::new("goldenrod", 0.709803921568627, 0.294117647058824, -0.749019607843137, 1.0),
    NamedColor::new("gray", 0.00392156862745097, 0.00392156862745097, 0.00392156862745097, 1.0),
    NamedColor::new("grey", 0.00392156862745097, 0.00392156862745097, 0.00392156862745097, 1.0),
    NamedColor::new("green", -1.0, 0.00392156862745097, -1.0, 1.0),
    NamedColor::new("greenyellow", 0.356862745098039, 1.0, -0.631372549019608, 1.0),
    NamedColor::new("honeydew", 0.882352941176471, 1.0, 0.882352941176471, 1.0),
    NamedColor::new("hotpink", 1.0, -0.176470588235294, 0.411764705882353, 1.0),
    NamedColor::new("indigo", -0.411764705882353, -1.0, 0.0196078431372548, 1.0),
    NamedColor::new("ivory", 1.0, 1.0, 0.882352941176471, 1.0),
    NamedColor::new("khaki", 0.882352941176471, 0.803921568627451, 0.0980392156862746, 1.0),
    NamedColor::new("lavender", 0.803921568627451, 0.803921568627451, 0.96078431372549, 1.0),
    NamedColor::new("lavenderblush", 1.0, 0.882352941176471, 0.92156862745098, 1.0),
    NamedColor::new("lawngreen", -0.0274509803921569, 0.976470588235294, -1.0, 1.0),
    NamedColor::new("lemonchiffon", 1.0, 0.96078431372549, 0.607843137254902, 1.0),
    NamedColor::new("lightblue", 0.356862745098039, 0.694117647058824, 0.803921568627451, 1.0),
    NamedColor::new("lightcoral", 0.882352941176471, 0.00392156862745097, 0.00392156862745097, 1.0),
    NamedColor::new("lightcyan", 0.756862745098039, 1.0, 1.0, 1.0),
    NamedColor::new("lightgoldenrodyellow", 0.96078431372549, 0.96078431372549, 0.647058823529412, 1.0),
    NamedColor::new("lightgray", 0.654901960784314, 0.654901960784314, 0.654901960784314, 1.0),
    NamedColor::new("lightgreen", 0.129411764705882, 0.866666666666667, 0.129411764705882, 1.0),
    NamedColor::new("lightgrey", 0.654901960784314, 0.654901960784314, 0.654901960784314, 1.0),
    NamedColor::new("lightpink", 1.0, 0.427450980392157, 0.513725490196078, 1.0),
    NamedColor::new("lightsalmon", 1.0, 0.254901960784314, -0.0431372549019607, 1.0),
    NamedColor::new("lightseagreen", -0.749019607843137, 0.396078431372549, 0.333333333333333, 1.0),
    NamedColor::new("lightskyblue", 0.0588235294117647, 0.615686274509804, 0.96078431372549, 1.0),
    NamedColor::new("lightslategray", -0.0666666666666667, 0.0666666666666667, 0.2, 1.0),
    NamedColor::new("lightslategrey", -0.0666666666666667, 0.0666666666666667, 0.2, 1.0),
    NamedColor::new("lightsteelblue", 0.380392156862745, 0.537254901960784, 0.741176470588235, 1.0),
    NamedColor::new("lightyellow", 1.0, 1.0, 0.756862745098039, 1.0),
    NamedColor::new("lime", -1.0, 1.0, -1.0, 1.0),
    NamedColor::new("limegreen", -0.607843137254902, 0.607843137254902, -0.607843137254902, 1.0),
    NamedColor::new("linen", 0.96078431372549, 0.882352941176471, 0.803921568627451, 1.0),
    NamedColor::new("magenta", 1.0, -1.0, 1.0, 1.0),
    NamedColor::new("maroon", 0.00392156862745097, -1.0, -1.0, 1.0),
    NamedColor::new("mediumaquamarine", -0.2, 0.607843137254902, 0.333333333333333, 1.0),
    NamedColor::new("mediumblue", -1.0, -1.0, 0.607843137254902, 1.0),
    NamedColor::new("mediumorchid", 0.458823529411765, -0.333333333333333, 0.654901960784314, 1.0),
    NamedColor::new("mediumpurple", 0.152941176470588, -0.12156862745098, 0.717647058823529, 1.0),
    NamedColor::new("mediumseagreen", -0.529411764705882, 0.403921568627451, -0.113725490196078, 1.0),
    NamedColor::new("mediumslateblue", -0.0352941176470588, -0.184313725490196, 0.866666666666667, 1.0),
    NamedColor::new("mediumspringgreen", -1.0, 0.96078431372549, 0.207843137254902, 1.0),
    NamedColor::new("mediumturquoise", -0.435294117647059, 0.63921568627451, 0.6, 1.0),
    NamedColor::new("mediumvioletred", 0.56078431372549, -0.835294117647059, 0.0431372549019609, 1.0),
    NamedColor::new("midnightblue", -0.803921568627451, -0.803921568627451, -0.12156862745098, 1.0),
    NamedColor::new("mintcream", 0.92156862745098, 1.0, 0.96078431372549, 1.0),
    NamedColor::new("mistyrose", 1.0, 0.788235294117647, 0.764705882352941, 1.0),
    NamedColor::new("moccasin", 1.0, 0.788235294117647, 0.419607843137255, 1.0),
    NamedColor::new("navajowhite", 1.0, 0.741176470588235, 0.356862745098039, 1.0),
    NamedColor::new("navy", -1.0, -1.0, 0.00392156862745097, 1.0),
    NamedColor::new("oldlace", 0.984313725490196, 0.92156862745098, 0.803921568627451, 1.0),
    NamedColor::new("olive", 0.00392156862745097, 0.00392156862745097, -1.0, 1.0),
    NamedColor::new("olivedrab", -0.16078431372549, 0.113725490196078, -0.725490196078431, 1.0),
    NamedColor::new("orange", 1.0, 0.294117647058824, -1.0, 1.0),
    NamedColor::new("orangered", 1.0, -0.458823529411765, -1.0, 1.0),
    NamedColor::new("orchid", 0.709803921568627, -0.12156862745098, 0.67843137254902, 1.0),
    NamedColor::new("palegoldenrod", 0.866666666666667, 0.819607843137255, 0.333333333333333, 1.0),
    NamedColor::new("palegreen", 0.192156862745098, 0.968627450980392, 0.192156862745098, 1.0),
    NamedColor::new("paleturquoise", 0.372549019607843, 0.866666666666667, 0.866666666666667, 1.0),
    NamedColor::new("palevioletred", 0.717647058823529, -0.12156862745098, 0.152941176470588, 1.0),
    NamedColor::new("papayawhip", 1.0, 0.874509803921569, 0.670588235294118, 1.0),
    NamedColor::new("peachpuff", 1.0, 0.709803921568627, 0.450980392156863, 1.0),
    NamedColor::new("peru", 0.607843137254902, 0.0431372549019609, -0.505882352941176, 1.0),
    NamedColor::new("pink", 1.0, 0.505882352941176, 0.592156862745098, 1.0),
    NamedColor::new("plum", 0.733333333333333, 0.254901960784314, 0.733333333333333, 1.0),
    NamedColor::new("powderblue", 0.380392156862745, 0.756862745098039, 0.803921568627451, 1.0),
    NamedColor::new("purple", 0.00392156862745097, -1.0, 0.00392156862745097, 1.0),
    NamedColor::new("red", 1.0, -1.0, -1.0, 1.0),
    NamedColor::new("rosybrown", 0.474509803921569, 0.12156862745098, 0.12156862745098, 1.0),
    NamedColor::new("royalblue", -0.490196078431373, -0.176470588235294, 0.764705882352941, 1.0),
    NamedColor::new("saddlebrown", 0.0901960784313725, -0.458823529411765, -0.850980392156863, 1.0),
    NamedColor::new("salmon", 0.96078431372549, 0.00392156862745097, -0.105882352941176, 1.0),
    NamedColor::new("sandybrown", 0.913725490196079, 0.286274509803922, -0.247058823529412, 1.0),
    NamedColor::new("seagreen", -0.63921568627451, 0.0901960784313725, -0.317647058823529, 1.0),
    NamedColor::new("seashell", 1.0, 0.92156862745098, 0.866666666666667, 1.0),
    NamedColor::new("sienna", 0.254901960784314, -0.356862745098039, -0.647058823529412, 1.0),
    NamedColor::new("silver", 0.505882352941176, 0.505882352941176, 0.505882352941176, 1.0),
    NamedColor::new("skyblue", 0.0588235294117647, 0.615686274509804, 0.843137254901961, 1.0),
    NamedColor::new("slateblue", -0.168627450980392, -0.294117647058823, 0.607843137254902, 1.0),
    NamedColor::new("slategray", -0.12156862745098, 0.00392156862745097, 0.129411764705882, 1.0),
    NamedColor::new("slategrey", -0.12156862745098, 0.00392156862745097, 0.129411764705882, 1.0),
    NamedColor::new("snow", 1.0, 0.96078431372549, 0.96078431372549, 1.0),
    NamedColor::new("springgreen", -1.0, 1.0, -0.00392156862745097, 1.0),
    NamedColor::new("steelblue", -0.450980392156863, 0.0196078431372548, 0.411764705882353, 1.0),
    NamedColor::new("tan", 0.647058823529412, 0.411764705882353, 0.0980392156862746, 1.0),
    NamedColor::new("teal", -1.0, 0.00392156862745097, 0.00392156862745097, 1.0),
    NamedColor::new("thistle", 0.694117647058824, 0.498039215686275, 0.694117647058824, 1.0),
    NamedColor::new("tomato", 1.0, -0.223529411764706, -0.443137254901961, 1.0),
    NamedColor::new("turquoise", -0.498039215686275, 0.756862745098039, 0.631372549019608, 1.0),
    NamedColor::new("violet", 0.866666666666667, 0.0196078431372548, 0.866666666666667, 1.0),
    NamedColor::new("wheat", 0.92156862745098, 0.741176470588235, 0.403921568627451, 1.0),
    NamedColor::new("white", 1.0, 1.0, 1.0, 1.0),
    NamedColor::new("whitesmoke", 0.92156862745098, 0.92156862745098, 0.92156862745098, 1.0),
    NamedColor::new("yellow", 1.0, 1.0, -1.0, 1.0),
    NamedColor::new("yellowgreen", 0.207843137254902, 0.607843137254902, -0.607843137254902, 1.0),
];

static BY_NAME: LazyLock<HashMap<&'static str, &'static NamedColor>> = LazyLock::new(|| {
    NAMED_COLORS
        .iter()
        .map(|entry| (entry.name, entry))
        .collect()
});

/// Strip whitespace and any quotes surrounding a color name.
fn clean(name: &str) -> String {
    name.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_ascii_lowercase()
}

/// Find a named color, ignoring case and surrounding quotes.
pub fn lookup(name: &str) -> Option<&'static NamedColor> {
    BY_NAME.get(clean(name).as_str()).copied()
}

/// Find the first named color whose RGBA value matches `rgba` when every
/// channel of both is rounded to 2 decimals.
pub fn reverse_lookup(rgba: [Component; 4]) -> Option<&'static NamedColor> {
    let target = rgba.map(|c| round_to(c, 2));
    NAMED_COLORS
        .iter()
        .find(|entry| entry.rgba().map(|c| round_to(c, 2)) == target)
}
