use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod core;
mod framework;
mod palette;

use crate::core::{output::OutputWriter, PaletteConfig};

#[derive(Parser)]
#[command(name = "unopalette")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Radix color scales and safelist generator for UnoCSS",
    long_about = "Generates the utility-class scales for every Radix color (bg, color, \
                  focus:ring, shadow) and the flattened safelist UnoCSS must always keep."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, markdown)
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Path to a palette config file (defaults to ./unopalette.toml, then the user config)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or write the safelist for the configured palette
    Safelist {
        /// Write the safelist as a JSON array to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Drop repeated tokens, keeping the first occurrence
        #[arg(long)]
        dedup: bool,
    },

    /// Generate the scale for one prefix
    Scale {
        /// Utility prefix (e.g., bg, color, focus:ring, shadow)
        prefix: String,

        /// Colors to generate (defaults to the configured colors)
        colors: Vec<String>,

        /// Skip the alpha (-A) scales
        #[arg(long)]
        no_alpha: bool,

        /// Sort keys alphabetically
        #[arg(short, long)]
        sorted: bool,
    },

    /// Build the 12 dark-to-light legend stops from an ordered palette
    Legend {
        /// Palette entries, lightest first (at least 2)
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// List the configured colors and their utility names
    Colors,

    /// Print the framework configuration the safelist is built for
    Framework,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so generated output stays machine-readable
    let filter = if cli.verbose { "unopalette=debug" } else { "unopalette=info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command, cli.config, &cli.format) {
        OutputWriter::new(&cli.format).write_error(&format!("{:#}", e))?;
        std::process::exit(1);
    }

    Ok(())
}

fn run(command: Commands, config_path: Option<PathBuf>, format: &OutputFormat) -> Result<()> {
    let config = PaletteConfig::load(config_path.as_deref())?;

    match command {
        Commands::Safelist { output, dedup } => {
            commands::safelist::run(&config, output, dedup, format)?
        }
        Commands::Scale {
            prefix,
            colors,
            no_alpha,
            sorted,
        } => commands::scale::run(&config, prefix, colors, no_alpha, sorted, format)?,
        Commands::Legend { tokens } => commands::legend::run(tokens, format)?,
        Commands::Colors => commands::colors::run(&config, format)?,
        Commands::Framework => commands::framework::run(format)?,
    }

    Ok(())
}
