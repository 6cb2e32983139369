// ============================================================================
// FIND BLOOD BANKS VIEW - Map search via the Google Maps Embed API
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_input, on_submit, set_inner_html, ElementBuilder};
use crate::utils::GOOGLE_MAPS_API_KEY;
use crate::views::widgets::{dashboard_container, flash_status, labeled_input, status_banner};

const MAP_STATUS_ID: &str = "map-status";

/// Minimal query-string percent encoding (unreserved chars pass through).
fn url_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

/// Build the embed URL for a "blood banks in <location>" search.
fn embed_url(api_key: &str, location: &str) -> String {
    let query = format!("blood banks in {}", location);
    format!(
        "https://www.google.com/maps/embed/v1/search?key={}&q={}",
        api_key,
        url_encode(&query)
    )
}

pub fn render_find_blood_banks() -> Result<Element, JsValue> {
    let (container, card) = dashboard_container("Find Blood Banks")?;

    append_child(&card, &ElementBuilder::new("p")?
        .class("page-subtitle")
        .text("Search for blood banks in any location using Google Maps directly.")
        .build())?;
    append_child(&card, &status_banner(MAP_STATUS_ID)?)?;

    let search_box = ElementBuilder::new("div")?.class("dashboard-section").build();
    append_child(&search_box, &ElementBuilder::new("h3")?.class("section-title").text("Search on Google Maps").build())?;
    append_child(&search_box, &ElementBuilder::new("p")?
        .text("Enter a city or specific location to find blood banks globally.")
        .build())?;

    let form = ElementBuilder::new("form")?.build();
    let location = Rc::new(RefCell::new(String::new()));
    let (location_field, location_input) = labeled_input("City or Location", "text", "", "e.g., New Delhi")?;
    {
        let location = location.clone();
        on_input(&location_input, move |v| *location.borrow_mut() = v)?;
    }
    let submit = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("type", "submit")?
        .text("Search on Map")
        .build();
    append_child(&form, &location_field)?;
    append_child(&form, &submit)?;

    let results = ElementBuilder::new("div")?.class("map-results").build();

    {
        let results = results.clone();
        on_submit(&form, move || {
            let location = location.borrow().clone();
            if location.is_empty() {
                flash_status(MAP_STATUS_ID, "Please enter a location to search on the map.");
                return;
            }
            if GOOGLE_MAPS_API_KEY.is_empty() {
                flash_status(
                    MAP_STATUS_ID,
                    "Error: Google Maps API Key is missing or invalid. Set GOOGLE_MAPS_API_KEY in your .env file.",
                );
                return;
            }

            flash_status(MAP_STATUS_ID, "Loading general map search results...");
            let url = embed_url(GOOGLE_MAPS_API_KEY, &location);
            log::info!("🗺️ Map search: {}", location);
            set_inner_html(&results, "");
            if let Ok(frame_box) = build_map_frame(&url) {
                let _ = results.append_child(&frame_box);
            }
        })?;
    }

    append_child(&search_box, &form)?;
    append_child(&search_box, &results)?;
    append_child(&card, &search_box)?;

    Ok(container)
}

fn build_map_frame(url: &str) -> Result<Element, JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("map-frame").build();
    append_child(&wrapper, &ElementBuilder::new("h4")?.text("Map Results:").build())?;
    let iframe = ElementBuilder::new("iframe")?
        .attr("src", url)?
        .attr("width", "100%")?
        .attr("height", "450")?
        .attr("loading", "lazy")?
        .attr("referrerpolicy", "no-referrer-when-downgrade")?
        .attr("title", "General Blood Bank Search Map")?
        .build();
    append_child(&wrapper, &iframe)?;
    append_child(&wrapper, &ElementBuilder::new("p")?
        .class("map-note")
        .text("(Note: This map searches Google Maps directly. A valid API key is required for full functionality and to avoid potential rate limits.)")
        .build())?;
    Ok(wrapper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_encodes_the_query() {
        let url = embed_url("KEY", "New Delhi");
        assert!(url.starts_with("https://www.google.com/maps/embed/v1/search?key=KEY&q="));
        assert!(url.contains("blood%20banks%20in%20New%20Delhi"));
    }
}
