pub mod config;
pub mod error;
pub mod output;

pub use config::PaletteConfig;
