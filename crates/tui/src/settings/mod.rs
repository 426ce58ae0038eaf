use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/budget_tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Document used to pre-fill the save/load prompts.
    pub data_file: String,
    /// Load `data_file` at startup when it exists.
    pub load_on_start: bool,
    pub log_file: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: "budget.json".to_string(),
            load_on_start: true,
            log_file: "budget_tui.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "budget_tui", about = "Budget categories & expenses editor")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the expenses document (JSON).
    #[arg(long)]
    data_file: Option<String>,
    /// Start with an empty table instead of loading the document.
    #[arg(long)]
    no_load: bool,
    /// Override the log file path.
    #[arg(long)]
    log_file: Option<String>,
    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    resolve(Args::parse())
}

fn resolve(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("BUDGET_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(data_file) = args.data_file {
        settings.data_file = data_file;
    }
    if args.no_load {
        settings.load_on_start = false;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
