mod bootstrap;

use anyhow::{Context, Result};
use dashboard_core::settings::Settings;
use dashboard_data::reader::load_rentals;
use dashboard_ui::app::App;
use dashboard_ui::opening_hours_view::HighlightMode;

fn main() -> Result<()> {
    let settings = Settings::load();

    let log_path = bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Bike Sharing Dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Data: {}, Theme: {}, Highlight: {}, Log: {}",
        settings.data_file.display(),
        settings.theme,
        settings.highlight,
        log_path.display()
    );

    // Load before entering the alternate screen so failures print normally.
    let table = load_rentals(&settings.data_file).with_context(|| {
        format!(
            "could not load rental data from {}",
            settings.data_file.display()
        )
    })?;
    let bounds = table
        .full_range()
        .context("rental data contains no dates")?;
    let initial = settings.initial_range(bounds);

    let app = App::new(
        &table,
        initial,
        &settings.theme,
        HighlightMode::from_name(&settings.highlight),
    )?;
    app.run()?;

    tracing::info!("Dashboard closed");
    Ok(())
}
