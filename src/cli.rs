//! Command-line argument parsing
//!
//! Supports:
//! - Loading one statement file
//! - Running a command script against it
//! - Exporting the processed table

use clap::Parser;
use std::path::PathBuf;

/// Clean, aggregate and export bank-statement CSV files
#[derive(Parser, Debug)]
#[command(
    name = "statement-grid",
    version,
    about = "Clean, aggregate and export bank-statement CSV files"
)]
pub struct CliArgs {
    /// Statement file to load (.csv or .txt)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the processed table here after the script runs
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Command script to run after loading
    #[arg(short, long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Grid container width in pixels
    #[arg(long, value_name = "PX", default_value_t = 1280.0)]
    pub width: f32,

    /// Grid container height in pixels
    #[arg(long, value_name = "PX", default_value_t = 720.0)]
    pub height: f32,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub quiet: bool,
    pub config_path: Option<PathBuf>,
    /// Container size (width, height)
    pub container: (f32, f32),
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.file.is_dir() {
            return Err(format!("{} is a directory", self.file.display()));
        }

        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("--{} must be a positive number", name));
            }
        }

        if self.output.as_ref() == Some(&self.file) {
            return Err("Refusing to overwrite the input file".to_string());
        }

        Ok(StartupConfig {
            file: self.file,
            output: self.output,
            script: self.script,
            quiet: self.quiet,
            config_path: self.config,
            container: (self.width, self.height),
        })
    }
}
