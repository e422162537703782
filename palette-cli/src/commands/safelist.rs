use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use crate::core::{output::OutputWriter, PaletteConfig};
use crate::palette::Palette;

/// Tokens to emit for a palette, optionally with repeats removed.
pub fn collect_tokens(palette: &Palette, dedup: bool) -> Vec<String> {
    if dedup {
        palette.deduped_safelist()
    } else {
        palette.safelist.clone()
    }
}

pub fn run(
    config: &PaletteConfig,
    output: Option<PathBuf>,
    dedup: bool,
    format: &crate::OutputFormat,
) -> Result<()> {
    let palette = Palette::build(config);
    let tokens = collect_tokens(&palette, dedup);

    match output {
        Some(path) => {
            // Files are always JSON so build tooling can import them directly
            let json = serde_json::to_string_pretty(&tokens)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(&path, json)
                .with_context(|| format!("Failed to write safelist: {}", path.display()))?;
            tracing::info!("Wrote {} tokens to {}", tokens.len(), path.display());
        }
        None => OutputWriter::new(format).write_safelist(&tokens)?,
    }

    Ok(())
}
