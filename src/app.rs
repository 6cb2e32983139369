// ============================================================================
// APP - Root application object: state + render loop
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, set_inner_html};
use crate::session::SessionStore;
use crate::state::AppState;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Mount on the #app element and restore any persisted session.
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(SessionStore::browser());
        state.hydrate();

        Ok(Self { state, root })
    }

    /// Full re-render: wipe the root and rebuild the whole tree from state.
    /// Every event handler mutates state and asks for this; per-screen data
    /// loads happen inside the screens themselves.
    pub fn render(&self) -> Result<(), JsValue> {
        log::debug!("🎬 Rendering app (view: {})", self.state.nav.current_view().id());
        set_inner_html(&self.root, "");
        let tree = render_app(&self.state)?;
        self.root.append_child(&tree)?;
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
