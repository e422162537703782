use super::colors::special_case;
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Number of steps in a Radix scale.
pub const STEPS: usize = 12;

/// Suffix appended to a color name to key its alpha scale.
pub const ALPHA_KEY_SUFFIX: &str = "-A";

/// Ordered mapping from a scale key (`red`, `red-A`) to its tokens.
///
/// Keys are unique; inserting an existing key replaces its tokens in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorScale {
    entries: IndexMap<String, Vec<String>>,
}

impl ColorScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, tokens: Vec<String>) {
        self.entries.insert(key.into(), tokens);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(|tokens| tokens.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Every token of every entry, in entry order.
    pub fn tokens(&self) -> impl Iterator<Item = &String> {
        self.entries.values().flatten()
    }

    /// Total token count across all entries.
    pub fn token_count(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }
}

/// Either one color name or an ordered list of them.
#[derive(Debug, Clone)]
pub enum ColorInput {
    Single(String),
    List(Vec<String>),
}

impl From<&str> for ColorInput {
    fn from(color: &str) -> Self {
        ColorInput::Single(color.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(color: String) -> Self {
        ColorInput::Single(color)
    }
}

impl From<&[&str]> for ColorInput {
    fn from(colors: &[&str]) -> Self {
        ColorInput::List(colors.iter().map(|c| c.to_string()).collect())
    }
}

impl<const N: usize> From<&[&str; N]> for ColorInput {
    fn from(colors: &[&str; N]) -> Self {
        ColorInput::from(colors.as_slice())
    }
}

impl From<&[String]> for ColorInput {
    fn from(colors: &[String]) -> Self {
        ColorInput::List(colors.to_vec())
    }
}

impl From<Vec<String>> for ColorInput {
    fn from(colors: Vec<String>) -> Self {
        ColorInput::List(colors)
    }
}

fn base_scale(prefix: &str, color: &str) -> Vec<String> {
    match special_case(color) {
        Some(custom) => vec![format!("{}-{}", prefix, custom)],
        None => (1..=STEPS)
            .map(|i| format!("{}-{}-{}", prefix, color, i))
            .collect(),
    }
}

// Generated for special cases too: black/white get a full alpha scale.
fn alpha_scale(prefix: &str, color: &str) -> Vec<String> {
    (1..=STEPS)
        .map(|i| format!("{}-{}-{}A", prefix, color, i))
        .collect()
}

fn push_color(scale: &mut ColorScale, prefix: &str, color: &str, alpha: bool) {
    scale.insert(color, base_scale(prefix, color));
    if alpha {
        scale.insert(
            format!("{}{}", color, ALPHA_KEY_SUFFIX),
            alpha_scale(prefix, color),
        );
    }
}

/// Generates the utility-class scales for `colors` under `prefix`.
///
/// Any string is accepted as a color name and templated as-is.
pub fn generate_scale(prefix: &str, colors: impl Into<ColorInput>, alpha: bool) -> ColorScale {
    let mut scale = ColorScale::new();
    match colors.into() {
        ColorInput::Single(color) => push_color(&mut scale, prefix, &color, alpha),
        ColorInput::List(colors) => {
            for color in &colors {
                push_color(&mut scale, prefix, color, alpha);
            }
        }
    }
    tracing::debug!(
        "Generated {} scale entries for prefix '{}' (alpha: {})",
        scale.len(),
        prefix,
        alpha
    );
    scale
}

/// Decomposed, lowercased form of `key`.
fn folded(key: &str) -> impl Iterator<Item = char> + '_ {
    key.nfd().flat_map(char::to_lowercase)
}

/// Collation-style comparison in the manner of `localeCompare`.
///
/// Base letters decide first (accents and case ignored), then accents
/// (unaccented first), then case (lowercase first).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let base = |key: &str| folded(key).filter(|c| !is_combining_mark(*c)).collect::<Vec<_>>();
    base(a)
        .cmp(&base(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.nfd().cmp(a.nfd()))
}

/// Returns a copy of `scale` with its keys in locale order.
pub fn sort_entries(scale: &ColorScale) -> ColorScale {
    let mut entries = scale.entries.clone();
    entries.sort_by(|a, _, b, _| locale_cmp(a, b));
    ColorScale { entries }
}
