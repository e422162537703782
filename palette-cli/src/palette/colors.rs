//! The Radix color names the palette is generated from.

/// All Radix colors, in the order their scales are emitted.
pub const COLORS: [&str; 33] = [
    "gray", "mauve", "slate", "sage", "olive", "sand", "gold", "bronze", "brown", "yellow",
    "amber", "orange", "tomato", "red", "ruby", "crimson", "pink", "plum", "purple", "violet",
    "iris", "indigo", "blue", "cyan", "teal", "jade", "green", "grass", "lime", "mint", "sky",
    "black", "white",
];

/// Public names of the colors that have no numbered steps.
pub struct DefaultColor;

impl DefaultColor {
    pub const BLACK: &'static str = "black";
    pub const WHITE: &'static str = "white";
}

/// Names UnoCSS knows the solid black/white utilities by.
pub struct CustomColor;

impl CustomColor {
    pub const BLACK: &'static str = "pureBlack";
    pub const WHITE: &'static str = "pureWhite";
}

const SPECIAL_CASES: [(&str, &str); 2] = [
    (DefaultColor::BLACK, CustomColor::BLACK),
    (DefaultColor::WHITE, CustomColor::WHITE),
];

/// Substituted name for a special-cased color, if `color` is one.
pub fn special_case(color: &str) -> Option<&'static str> {
    SPECIAL_CASES
        .iter()
        .find(|(default, _)| *default == color)
        .map(|(_, custom)| *custom)
}

/// Default color list as owned strings, for config defaults.
pub fn default_colors() -> Vec<String> {
    COLORS.iter().map(|c| c.to_string()).collect()
}
