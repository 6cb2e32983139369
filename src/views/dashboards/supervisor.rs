// ============================================================================
// SUPERVISOR DASHBOARD - Operations overview
// TODO: system overview, charges and authorizations once the backend grows
// the supervisor endpoints.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::views::widgets::dashboard_container;

pub fn render_supervisor_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let (container, card) = dashboard_container("Supervisor Dashboard")?;

    let user_id = state
        .session
        .get()
        .map(|s| s.user.id)
        .unwrap_or_default();
    let welcome = ElementBuilder::new("p")?
        .class("dashboard-welcome")
        .html(&format!(
            "Welcome, Supervisor! Your User ID: <span class=\"mono\">{}</span>",
            user_id
        ))
        .build();
    append_child(&card, &welcome)?;
    append_child(&card, &ElementBuilder::new("p")?
        .text("Oversee operations, manage charges, and authorize critical actions.")
        .build())?;

    Ok(container)
}
