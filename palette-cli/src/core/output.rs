use crate::framework::FrameworkConfig;
use crate::palette::ColorScale;
use anyhow::Result;
use serde::Serialize;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

pub struct OutputWriter {
    format: OutputFormat,
}

/// One row of the `colors` listing.
#[derive(Debug, Serialize)]
pub struct ColorEntry {
    pub name: String,
    pub utility_name: String,
}

impl OutputWriter {
    pub fn new(format: &crate::OutputFormat) -> Self {
        let format = match format {
            crate::OutputFormat::Text => OutputFormat::Text,
            crate::OutputFormat::Json => OutputFormat::Json,
            crate::OutputFormat::Markdown => OutputFormat::Markdown,
        };
        Self { format }
    }

    pub fn write_safelist(&self, tokens: &[String]) -> Result<()> {
        println!("{}", self.render_safelist(tokens)?);
        Ok(())
    }

    pub fn write_scale(&self, prefix: &str, scale: &ColorScale) -> Result<()> {
        println!("{}", self.render_scale(prefix, scale)?);
        Ok(())
    }

    pub fn write_legend(&self, stops: &[String]) -> Result<()> {
        println!("{}", self.render_legend(stops)?);
        Ok(())
    }

    pub fn write_colors(&self, colors: &[ColorEntry]) -> Result<()> {
        println!("{}", self.render_colors(colors)?);
        Ok(())
    }

    pub fn write_framework(&self, config: &FrameworkConfig) -> Result<()> {
        println!("{}", self.render_framework(config)?);
        Ok(())
    }

    fn render_safelist(&self, tokens: &[String]) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(tokens)?,
            OutputFormat::Text => tokens.join("\n"),
            OutputFormat::Markdown => {
                let mut out = format!("# Safelist\n\n{} tokens\n\n```\n", tokens.len());
                out.push_str(&tokens.join("\n"));
                out.push_str("\n```");
                out
            }
        })
    }

    fn render_scale(&self, prefix: &str, scale: &ColorScale) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(scale)?,
            OutputFormat::Text => scale
                .iter()
                .map(|(key, tokens)| format!("{}: {}", key, tokens.join(" ")))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Markdown => {
                let mut out = format!("# Scale `{}`\n\n| Key | Tokens |\n|-----|--------|", prefix);
                for (key, tokens) in scale.iter() {
                    let cells: Vec<String> = tokens.iter().map(|t| format!("`{}`", t)).collect();
                    out.push_str(&format!("\n| {} | {} |", key, cells.join(" ")));
                }
                out
            }
        })
    }

    fn render_legend(&self, stops: &[String]) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(stops)?,
            OutputFormat::Text => stops.join("\n"),
            OutputFormat::Markdown => {
                let mut out = String::from("# Legend\n");
                for (i, stop) in stops.iter().enumerate() {
                    out.push_str(&format!("\n{}. `{}`", i + 1, stop));
                }
                out
            }
        })
    }

    fn render_colors(&self, colors: &[ColorEntry]) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(colors)?,
            OutputFormat::Text => colors
                .iter()
                .map(|c| {
                    if c.name == c.utility_name {
                        c.name.clone()
                    } else {
                        format!("{} ({})", c.name, c.utility_name)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Markdown => {
                let mut out = String::from("| Color | Utility name |\n|-------|--------------|");
                for c in colors {
                    out.push_str(&format!("\n| {} | {} |", c.name, c.utility_name));
                }
                out
            }
        })
    }

    fn render_framework(&self, config: &FrameworkConfig) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(config)?,
            OutputFormat::Text => {
                let mut out = format!(
                    "compatibilityDate: {}\ndevtools: {}\nmodules:",
                    config.compatibility_date,
                    if config.devtools.enabled { "enabled" } else { "disabled" }
                );
                for module in &config.modules {
                    out.push_str(&format!("\n  {}", module));
                }
                out.push_str("\nvite.optimizeDeps.include:");
                for dep in &config.vite.optimize_deps.include {
                    out.push_str(&format!("\n  {}", dep));
                }
                out
            }
            OutputFormat::Markdown => format!(
                "# Framework config\n\n```json\n{}\n```",
                serde_json::to_string_pretty(config)?
            ),
        })
    }

    pub fn write_error(&self, error: &str) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                #[derive(Serialize)]
                struct ErrorResponse {
                    error: String,
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ErrorResponse {
                        error: error.to_string()
                    })?
                );
            }
            OutputFormat::Text | OutputFormat::Markdown => {
                eprintln!("Error: {}", error);
            }
        }
        Ok(())
    }
}
