use crate::core::error::PaletteError;
use crate::palette::colors::default_colors;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs for palette and safelist generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaletteConfig {
    /// Base color names, in output order
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,

    /// Utility prefixes to generate scales for (e.g., "bg", "focus:ring")
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,

    /// Generate the `-A` alpha scales
    #[serde(default = "default_alpha")]
    pub alpha: bool,

    /// Literal tokens appended to the safelist
    #[serde(default = "default_extra")]
    pub extra: Vec<String>,
}

fn default_prefixes() -> Vec<String> {
    ["bg", "color", "focus:ring", "shadow"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_alpha() -> bool {
    true
}

fn default_extra() -> Vec<String> {
    vec!["bg-pureBlack".to_string()]
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            prefixes: default_prefixes(),
            alpha: default_alpha(),
            extra: default_extra(),
        }
    }
}

impl PaletteConfig {
    /// Load configuration.
    ///
    /// With an explicit path, only that file is read and it must exist.
    /// Otherwise the first match wins, highest priority first:
    /// 1. `./unopalette.toml`
    /// 2. `~/.config/unopalette/config.toml`
    /// 3. Built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, PaletteError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(PaletteError::ConfigNotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let project_path = Self::project_config_path();
        if project_path.exists() {
            tracing::info!("Loading project config from: {}", project_path.display());
            return Self::load_from_file(&project_path);
        }

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::info!("Loading global config from: {}", global_path.display());
                return Self::load_from_file(&global_path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file(path: &Path) -> Result<Self, PaletteError> {
        let contents = fs::read_to_string(path).map_err(|source| PaletteError::ConfigRead {
            file: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|e| PaletteError::ConfigParse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// ~/.config/unopalette/config.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("unopalette").join("config.toml"))
    }

    fn project_config_path() -> PathBuf {
        PathBuf::from("unopalette.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PaletteConfig::default();
        assert_eq!(config.colors.len(), 33);
        assert_eq!(config.prefixes, vec!["bg", "color", "focus:ring", "shadow"]);
        assert!(config.alpha);
        assert_eq!(config.extra, vec!["bg-pureBlack"]);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
            colors = ["red", "blue"]
            alpha = false
        "#;

        let config: PaletteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.colors, vec!["red", "blue"]);
        assert!(!config.alpha);
        // Other fields should use defaults
        assert_eq!(config.prefixes.len(), 4);
        assert_eq!(config.extra, vec!["bg-pureBlack"]);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PaletteConfig::default();
        let toml_string = toml::to_string(&config).unwrap();
        let deserialized: PaletteConfig = toml::from_str(&toml_string).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("palette.toml");
        fs::write(&path, "prefixes = [\"border\"]\nextra = []\n").unwrap();

        let config = PaletteConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.prefixes, vec!["border"]);
        assert!(config.extra.is_empty());
        assert_eq!(config.colors.len(), 33);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");

        let result = PaletteConfig::load(Some(path.as_path()));
        assert!(matches!(result, Err(PaletteError::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "colors = [\"red\"\n").unwrap();

        let result = PaletteConfig::load(Some(path.as_path()));
        assert!(matches!(result, Err(PaletteError::ConfigParse { .. })));
    }

    #[test]
    fn test_unreadable_config_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file
        let path = temp_dir.path().join("unopalette.toml");
        fs::create_dir(&path).unwrap();

        let err = PaletteConfig::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, PaletteError::ConfigRead { ref file, .. } if file == &path));
        assert!(err.to_string().contains(&path.display().to_string()));
    }
}
