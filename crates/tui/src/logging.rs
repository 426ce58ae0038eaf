use std::{fs::OpenOptions, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::{
    error::{AppError, Result},
    settings::AppConfig,
};

/// Installs the global subscriber. Events go to the log file since the
/// terminal belongs to the UI.
pub fn init(config: &AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let filter = EnvFilter::try_new(filter_directives(&config.log_level))
        .map_err(|err| AppError::Logging(err.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}

fn filter_directives(level: &str) -> String {
    format!("budget_tui={level},ledger={level}", level = level.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_both_crates() {
        assert_eq!(filter_directives(" debug "), "budget_tui=debug,ledger=debug");
        assert!(EnvFilter::try_new(filter_directives("info")).is_ok());
    }
}
