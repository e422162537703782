use anyhow::Result;
use crate::core::output::OutputWriter;
use crate::framework::FrameworkConfig;

pub fn run(format: &crate::OutputFormat) -> Result<()> {
    OutputWriter::new(format).write_framework(&FrameworkConfig::default())?;
    Ok(())
}
