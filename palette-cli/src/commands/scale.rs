use anyhow::Result;
use crate::core::{output::OutputWriter, PaletteConfig};
use crate::palette::{generate_scale, sort_entries, ColorScale};

/// Scale for `prefix` over `colors`, or over the configured colors when empty.
pub fn build_scale(
    config: &PaletteConfig,
    prefix: &str,
    colors: Vec<String>,
    alpha: bool,
    sorted: bool,
) -> ColorScale {
    let scale = match colors.len() {
        0 => generate_scale(prefix, config.colors.as_slice(), alpha),
        1 => generate_scale(prefix, colors[0].as_str(), alpha),
        _ => generate_scale(prefix, colors, alpha),
    };

    if sorted {
        sort_entries(&scale)
    } else {
        scale
    }
}

pub fn run(
    config: &PaletteConfig,
    prefix: String,
    colors: Vec<String>,
    no_alpha: bool,
    sorted: bool,
    format: &crate::OutputFormat,
) -> Result<()> {
    let alpha = config.alpha && !no_alpha;
    let scale = build_scale(config, &prefix, colors, alpha, sorted);
    OutputWriter::new(format).write_scale(&prefix, &scale)?;
    Ok(())
}
