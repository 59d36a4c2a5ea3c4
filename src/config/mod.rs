use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::utils::error::{InvalidSetError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_paired_fields, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cartesian-product")]
#[command(about = "Interactive Cartesian product generator for two sets")]
pub struct CliConfig {
    #[arg(long, help = "Elements of set A for one-shot mode, e.g. \"{1, 2, 3}\"")]
    pub set_a: Option<String>,

    #[arg(long, help = "Elements of set B for one-shot mode, e.g. \"{x, y}\"")]
    pub set_b: Option<String>,

    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[arg(long, help = "Render pairs with set provenance, e.g. (1 ∈ A, x ∈ B)")]
    pub detailed: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_paired_fields("--set-a", &self.set_a, "--set-b", &self.set_b)?;

        if let Some(set_a) = &self.set_a {
            validate_non_empty_string("--set-a", set_a)?;
        }
        if let Some(set_b) = &self.set_b {
            validate_non_empty_string("--set-b", set_b)?;
        }

        // JSON output has no interactive prompts to mix with.
        if self.format == OutputFormat::Json && self.set_a.is_none() {
            return Err(InvalidSetError::Config {
                message: "--format json requires --set-a and --set-b".to_string(),
            });
        }

        Ok(())
    }
}
