//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::generation::ActionKind;

/// Study a PDF with an AI model: summaries, study plans and quizzes.
#[derive(Debug, Parser)]
#[command(name = "pdfstudy", version, about)]
pub struct Cli {
    /// PDF to load on start
    pub file: Option<PathBuf>,

    /// Generate one result, print it and exit (requires FILE)
    #[arg(long, value_enum, requires = "file")]
    pub action: Option<ActionKind>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the generation model
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Override the generation API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Apply command-line overrides to a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.generation.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.generation.base_url = base_url.clone();
        }
    }
}
