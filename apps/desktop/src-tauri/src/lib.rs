mod catalog_source;
mod commands;
mod config;
mod db;
mod state;

use anyhow::Context;
use config::AppConfig;
use db::SqliteKvStore;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    tracing::info!("Opening state database at {}", config.db_path.display());
    let store = SqliteKvStore::open(&config.db_path).context("failed to open state database")?;
    tracing::debug!("State schema version {}", store.schema_version()?);
    let catalog = catalog_source::load_catalog(config.catalog_path.as_deref())?;
    Ok(AppState::new(catalog, store))
}

fn try_run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(&config.log_filter);

    let app_state = build_state(&config)?;

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // Catalog commands
            commands::catalog::list_questions,
            commands::catalog::list_topics,
            commands::catalog::import_questions,
            commands::catalog::import_questions_file,
            commands::catalog::pick_questions_file,
            // Filter commands
            commands::filter::apply_filters,
            commands::filter::clear_filters,
            commands::filter::get_filters,
            // Study commands
            commands::study::submit_answer,
            commands::study::toggle_reveal,
            commands::study::go_to_last,
            commands::study::get_progress,
            // Settings commands
            commands::settings::get_theme,
            commands::settings::toggle_theme,
        ])
        .run(tauri::generate_context!())
        .context("error while running tauri application")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    if let Err(e) = try_run() {
        eprintln!("quiz-flashcards: {:#}", e);
        std::process::exit(1);
    }
}
