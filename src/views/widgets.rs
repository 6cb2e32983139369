// ============================================================================
// WIDGETS - Small reusable view pieces (cards, fields, status banners)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_text_content, ElementBuilder};
use crate::utils::STATUS_CLEAR_MS;

/// Container every dashboard-style page renders into: big title + white card.
pub fn dashboard_container(title: &str) -> Result<(Element, Element), JsValue> {
    let outer = ElementBuilder::new("div")?.class("page-container").build();
    let heading = ElementBuilder::new("h1")?
        .class("page-title")
        .text(title)
        .build();
    let card = ElementBuilder::new("div")?.class("page-card").build();
    append_child(&outer, &heading)?;
    append_child(&outer, &card)?;
    Ok((outer, card))
}

pub fn stat_card(value: &str, label: &str, icon: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("stat-card").build();
    append_child(&card, &ElementBuilder::new("div")?.class("stat-icon").text(icon).build())?;
    append_child(&card, &ElementBuilder::new("div")?.class("stat-value").text(value).build())?;
    append_child(&card, &ElementBuilder::new("p")?.class("stat-label").text(label).build())?;
    Ok(card)
}

pub fn step_card(icon: &str, title: &str, description: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("step-card").build();
    append_child(&card, &ElementBuilder::new("div")?.class("step-icon").text(icon).build())?;
    append_child(&card, &ElementBuilder::new("h3")?.text(title).build())?;
    append_child(&card, &ElementBuilder::new("p")?.text(description).build())?;
    Ok(card)
}

pub fn testimonial_card(quote: &str, author: &str, avatar_text: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("testimonial-card").build();
    append_child(&card, &ElementBuilder::new("div")?.class("testimonial-avatar").text(avatar_text).build())?;
    append_child(&card, &ElementBuilder::new("p")?.class("testimonial-quote").text(&format!("\u{201c}{}\u{201d}", quote)).build())?;
    append_child(&card, &ElementBuilder::new("p")?.class("testimonial-author").text(author).build())?;
    Ok(card)
}

/// Label + input pair. Returns (wrapper, input) so callers can hook events.
pub fn labeled_input(
    label: &str,
    input_type: &str,
    value: &str,
    placeholder: &str,
) -> Result<(Element, Element), JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("form-field").build();
    let label_el = ElementBuilder::new("label")?.class("form-label").text(label).build();
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .build();
    append_child(&wrapper, &label_el)?;
    append_child(&wrapper, &input)?;
    Ok((wrapper, input))
}

/// Label + select populated with (value, text) options.
pub fn labeled_select(
    label: &str,
    options: &[(String, String)],
    selected: &str,
) -> Result<(Element, Element), JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("form-field").build();
    let label_el = ElementBuilder::new("label")?.class("form-label").text(label).build();
    let select = ElementBuilder::new("select")?.class("form-input").build();
    for (value, text) in options {
        let option = ElementBuilder::new("option")?
            .attr("value", value)?
            .text(text)
            .build();
        if value.as_str() == selected {
            option.set_attribute("selected", "selected")?;
        }
        append_child(&select, &option)?;
    }
    append_child(&wrapper, &label_el)?;
    append_child(&wrapper, &select)?;
    Ok((wrapper, select))
}

pub fn labeled_textarea(label: &str, rows: u32, placeholder: &str) -> Result<(Element, Element), JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("form-field").build();
    let label_el = ElementBuilder::new("label")?.class("form-label").text(label).build();
    let area = ElementBuilder::new("textarea")?
        .class("form-input")
        .attr("rows", &rows.to_string())?
        .attr("placeholder", placeholder)?
        .build();
    append_child(&wrapper, &label_el)?;
    append_child(&wrapper, &area)?;
    Ok((wrapper, area))
}

/// Checkbox row for the eligibility questionnaire.
pub fn labeled_checkbox(label: &str, checked: bool) -> Result<(Element, Element), JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("form-check").build();
    let input = ElementBuilder::new("input")?.attr("type", "checkbox")?.build();
    if checked {
        input.set_attribute("checked", "checked")?;
    }
    let label_el = ElementBuilder::new("label")?.class("form-check-label").text(label).build();
    append_child(&wrapper, &input)?;
    append_child(&wrapper, &label_el)?;
    Ok((wrapper, input))
}

/// Empty status banner; pair with [`flash_status`].
pub fn status_banner(id: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.class("status-banner").id(id)?.build())
}

/// Show a transient status message that clears itself after a few seconds.
/// Messages containing "Error" render with the error style, matching how
/// every screen distinguishes success from failure.
pub fn flash_status(id: &str, message: &str) {
    if let Some(el) = get_element_by_id(id) {
        set_text_content(&el, message);
        let class = if message.contains("Error") {
            "status-banner status-error"
        } else {
            "status-banner status-ok"
        };
        el.set_class_name(class);
    }
    let id = id.to_string();
    Timeout::new(STATUS_CLEAR_MS, move || {
        if let Some(el) = get_element_by_id(&id) {
            set_text_content(&el, "");
            el.set_class_name("status-banner");
        }
    })
    .forget();
}

/// Pill-style status badge for request/appointment tables.
pub fn status_badge(status: &str) -> Result<Element, JsValue> {
    let class = match status {
        "Pending" => "badge badge-pending",
        "Approved" | "Scheduled" => "badge badge-info",
        "Fulfilled" | "Completed" => "badge badge-ok",
        _ => "badge badge-danger",
    };
    Ok(ElementBuilder::new("span")?.class(class).text(status).build())
}

/// Table skeleton with a header row; returns (table, tbody).
pub fn table_with_headers(headers: &[&str]) -> Result<(Element, Element), JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("table-wrapper").build();
    let table = ElementBuilder::new("table")?.class("data-table").build();
    let thead = ElementBuilder::new("thead")?.build();
    let row = ElementBuilder::new("tr")?.build();
    for header in headers {
        append_child(&row, &ElementBuilder::new("th")?.text(header).build())?;
    }
    append_child(&thead, &row)?;
    let tbody = ElementBuilder::new("tbody")?.build();
    append_child(&table, &thead)?;
    append_child(&table, &tbody)?;
    append_child(&wrapper, &table)?;
    Ok((wrapper, tbody))
}

pub fn td(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

/// Section box with a heading, used by every dashboard.
pub fn section(title: &str) -> Result<(Element, Element), JsValue> {
    let outer = ElementBuilder::new("div")?.class("dashboard-section").build();
    append_child(&outer, &ElementBuilder::new("h3")?.class("section-title").text(title).build())?;
    let body = ElementBuilder::new("div")?.class("section-body").build();
    append_child(&outer, &body)?;
    Ok((outer, body))
}

/// Shorten a Mongo-style id to its last 6 chars for table display.
pub fn short_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 6 {
        id.to_string()
    } else {
        chars[chars.len() - 6..].iter().collect()
    }
}
