// ============================================================================
// MEDICARE CLIENT - Hospital management frontend (Rust + WASM, MVVM)
// ============================================================================
// - Views: functions that build DOM from state
// - ViewModels: UI logic over the state
// - Services: backend communication and token storage
// - State: Rc<RefCell> containers with change subscribers
// - Models: shapes shared with the backend
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Info } else { log::Level::Warn };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 MediCare client starting ({})", CONFIG.backend_url());

    let mut app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Full re-render of the mounted app
pub fn rerender_app() {
    APP.with(|cell| match cell.try_borrow_mut() {
        Ok(mut app) => {
            if let Some(app) = app.as_mut() {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] {:?}", e);
                }
            }
        }
        Err(_) => log::warn!("⚠️ [RERENDER] App busy, render skipped"),
    });
}

/// Re-render hook callable from JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
