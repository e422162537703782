use super::scale::{generate_scale, ColorScale};
use crate::core::config::PaletteConfig;
use serde::Serialize;

/// Every generated scale plus the flattened safelist UnoCSS must keep.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    /// One generated scale per configured prefix, in prefix order.
    pub scales: Vec<PrefixScale>,
    pub safelist: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrefixScale {
    pub prefix: String,
    pub scale: ColorScale,
}

impl Palette {
    /// Builds the scales for every configured prefix and flattens them,
    /// followed by the extra tokens. Duplicates are kept.
    pub fn build(config: &PaletteConfig) -> Self {
        let scales: Vec<PrefixScale> = config
            .prefixes
            .iter()
            .map(|prefix| PrefixScale {
                prefix: prefix.clone(),
                scale: generate_scale(prefix, config.colors.as_slice(), config.alpha),
            })
            .collect();

        let safelist: Vec<String> = scales
            .iter()
            .flat_map(|s| s.scale.tokens().cloned())
            .chain(config.extra.iter().cloned())
            .collect();

        tracing::info!(
            "Built palette: {} prefixes, {} colors, {} safelist tokens",
            scales.len(),
            config.colors.len(),
            safelist.len()
        );

        Self { scales, safelist }
    }

    /// The stock palette: 33 Radix colors, `bg`/`color`/`focus:ring`/`shadow`.
    pub fn standard() -> Self {
        Self::build(&PaletteConfig::default())
    }

    /// Safelist with repeated tokens removed, first occurrence wins.
    pub fn deduped_safelist(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.safelist
            .iter()
            .filter(|token| seen.insert(token.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scale_for<'a>(palette: &'a Palette, prefix: &str) -> &'a ColorScale {
        &palette
            .scales
            .iter()
            .find(|s| s.prefix == prefix)
            .unwrap_or_else(|| panic!("no scale for prefix {}", prefix))
            .scale
    }

    #[test]
    fn test_standard_palette_shape() {
        let palette = Palette::standard();

        assert_eq!(palette.scales.len(), 4);
        // 31 regular colors * 24 + 2 special colors * 13, per prefix
        let per_prefix = 31 * 24 + 2 * 13;
        assert_eq!(palette.safelist.len(), 4 * per_prefix + 1);
        assert_eq!(palette.safelist.first().unwrap(), "bg-gray-1");
        assert_eq!(palette.safelist.last().unwrap(), "bg-pureBlack");
    }

    #[test]
    fn test_safelist_contains_pure_black_twice() {
        let palette = Palette::standard();
        let count = palette
            .safelist
            .iter()
            .filter(|t| *t == "bg-pureBlack")
            .count();
        assert_eq!(count, 2);
        assert_eq!(palette.deduped_safelist().len(), palette.safelist.len() - 1);
    }

    #[test]
    fn test_scales_follow_prefix_order() {
        let palette = Palette::standard();

        let prefixes: Vec<&str> = palette.scales.iter().map(|s| s.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["bg", "color", "focus:ring", "shadow"]);
        assert_eq!(scale_for(&palette, "bg").get("gray").unwrap()[0], "bg-gray-1");
        assert_eq!(scale_for(&palette, "color").get("white").unwrap(), &["color-pureWhite".to_string()]);
        assert_eq!(scale_for(&palette, "focus:ring").get("red-A").unwrap()[11], "focus:ring-red-12A");
        assert_eq!(scale_for(&palette, "shadow").get("sky").unwrap()[4], "shadow-sky-5");
        assert!(palette.scales.iter().all(|s| s.prefix != "border"));
    }

    #[test]
    fn test_custom_config() {
        let config = PaletteConfig {
            colors: vec!["red".to_string(), "black".to_string()],
            prefixes: vec!["border".to_string()],
            alpha: false,
            extra: vec![],
        };
        let palette = Palette::build(&config);

        let mut expected: Vec<String> = (1..=12).map(|i| format!("border-red-{}", i)).collect();
        expected.push("border-pureBlack".to_string());
        assert_eq!(palette.safelist, expected);
    }
}
