//! Reflect CLI
//!
//! Regenerates the engine's type registration source from its headers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reflect_core::build::PrebuiltXml;
use reflect_core::{Generator, GeneratorConfig, Outcome};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reflect")]
#[command(version = reflect_core::VERSION)]
#[command(about = "Generate C++ type registration code from documented headers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the registration source if any header changed
    Generate {
        /// Directory of headers to scan
        input: PathBuf,

        /// Directory the registration source is written to
        output: PathBuf,

        /// Namespace enclosing the generated registerTypes function
        namespace: String,

        /// Regenerate even when the output is up to date
        #[arg(short, long)]
        force: bool,

        /// JSON file overriding the default settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Read existing Doxygen XML from this directory instead of running Doxygen
        #[arg(long)]
        xml_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level: tracing::Level = cli
        .log_level
        .parse()
        .with_context(|| format!("invalid log level '{}'", cli.log_level))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Generate {
            input,
            output,
            namespace,
            force,
            config,
            xml_dir,
        } => {
            let config = match config {
                Some(path) => GeneratorConfig::load(&path)?,
                None => GeneratorConfig::default(),
            };

            tracing::debug!("Reflect v{}", reflect_core::VERSION);
            let mut generator = Generator::new(input, output, namespace).with_config(config);
            if let Some(dir) = xml_dir {
                generator = generator.with_producer(PrebuiltXml::new(dir));
            }

            match generator.run(force)? {
                Outcome::UpToDate => {}
                Outcome::Generated(report) => {
                    tracing::debug!("Generated {}", report.output.display());
                }
            }
        }
    }

    Ok(())
}
