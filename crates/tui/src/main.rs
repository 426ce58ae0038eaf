mod app;
mod error;
mod logging;
mod settings;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let settings = settings::load()?;
    logging::init(&settings)?;
    tracing::info!(data_file = %settings.data_file, "starting budget_tui");

    let mut app = app::App::new(settings);
    let result = app.run();
    if let Err(err) = &result {
        tracing::error!("budget_tui stopped: {err}");
    }
    result
}
