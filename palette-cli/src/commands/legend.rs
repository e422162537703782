use anyhow::Result;
use crate::core::output::OutputWriter;
use crate::palette::color_scales;

pub fn run(tokens: Vec<String>, format: &crate::OutputFormat) -> Result<()> {
    let stops = color_scales(tokens.as_slice())?;
    tracing::debug!("Legend built from {} tokens", tokens.len());
    OutputWriter::new(format).write_legend(&stops)?;
    Ok(())
}
