use thiserror::Error;
use std::path::PathBuf;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Palette needs at least 2 entries to build a legend, got {len}")]
    PaletteTooShort { len: usize },

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    #[error("Failed to read config {file}: {source}")]
    ConfigRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
