use anyhow::Result;
use crate::core::output::{ColorEntry, OutputWriter};
use crate::core::PaletteConfig;
use crate::palette::special_case;

pub fn color_entries(config: &PaletteConfig) -> Vec<ColorEntry> {
    config
        .colors
        .iter()
        .map(|name| ColorEntry {
            name: name.clone(),
            utility_name: special_case(name).unwrap_or(name.as_str()).to_string(),
        })
        .collect()
}

pub fn run(config: &PaletteConfig, format: &crate::OutputFormat) -> Result<()> {
    OutputWriter::new(format).write_colors(&color_entries(config))?;
    Ok(())
}
