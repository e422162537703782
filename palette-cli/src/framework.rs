//! Nuxt configuration the generated safelist is consumed by.
//!
//! Pure data. `Default` describes the app's `nuxt.config.ts`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkConfig {
    pub compatibility_date: String,
    pub devtools: DevtoolsConfig,
    /// Build modules registered with the framework
    pub modules: Vec<String>,
    pub vite: ViteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevtoolsConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViteConfig {
    pub optimize_deps: OptimizeDeps,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizeDeps {
    /// Dependencies forced into pre-bundling
    pub include: Vec<String>,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            compatibility_date: "2024-04-03".to_string(),
            devtools: DevtoolsConfig { enabled: true },
            modules: vec!["@nuxtjs/storybook".to_string()],
            vite: ViteConfig {
                optimize_deps: OptimizeDeps {
                    include: vec![
                        "storybook > @storybook/core > jsdoc-type-pratt-parser".to_string(),
                    ],
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_serializes_camel_case() {
        let value = serde_json::to_value(FrameworkConfig::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "compatibilityDate": "2024-04-03",
                "devtools": { "enabled": true },
                "modules": ["@nuxtjs/storybook"],
                "vite": {
                    "optimizeDeps": {
                        "include": ["storybook > @storybook/core > jsdoc-type-pratt-parser"]
                    }
                }
            })
        );
    }
}
