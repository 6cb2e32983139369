// ============================================================================
// BLOODLINK APP - Blood bank management frontend (pure Rust/WASM)
// ============================================================================
// Layering:
// - views: render functions building DOM (no business logic)
// - state: session + navigation with Rc<RefCell>
// - session: token decoding and the persisted session store
// - services: HTTP against the REST backend
// - models: wire structures shared with the backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod routing;
pub mod services;
pub mod session;
pub mod state;
pub mod utils;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Single app instance for the lifetime of the page.
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🩸 BloodLink starting...");

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render of the mounted app. Event handlers call this after every
/// state mutation; screens refetch their data as part of rendering.
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-rendering app: {:?}", e);
            }
        } else {
            log::warn!("⚠️ rerender_app called before the app was initialized");
        }
    });
}

/// Re-render hook callable from JavaScript.
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
