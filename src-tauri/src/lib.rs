//! Garage - Tauri Application
//!
//! Rust owns all state; the WebView renders the form and the list.

mod commands;
mod state;

use state::AppState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    garage_core::init_logging();

    tauri::Builder::default()
        .setup(|app| {
            // Open the database and initialize registry state
            let state = AppState::new()?;
            state.initialize()?;

            app.manage(state);

            tracing::info!("Garage started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Car commands
            commands::cars::create_car,
            commands::cars::update_car,
            commands::cars::get_car,
            commands::cars::find_cars_by_brand,
            commands::cars::list_cars,
            commands::cars::remove_car,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Garage");
}
