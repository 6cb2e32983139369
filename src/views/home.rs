// ============================================================================
// HOME VIEW - Hero, stats, how-it-works, testimonials
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::routing::View;
use crate::state::AppState;
use crate::views::widgets::{stat_card, step_card, testimonial_card};

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("page-container home").build();

    // Hero
    let hero = ElementBuilder::new("section")?.class("hero-section").build();
    let title = ElementBuilder::new("h1")?
        .class("hero-title")
        .html("Donate Blood, <span class=\"accent\">Save Lives</span>.")
        .build();
    let subtitle = ElementBuilder::new("p")?
        .class("hero-subtitle")
        .text("Every drop counts. Join our mission to connect donors with those in need and make a difference in the world.")
        .build();
    let actions = ElementBuilder::new("div")?.class("hero-actions").build();

    let find_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Find a Donation Camp")
        .build();
    {
        let state = state.clone();
        on_click(&find_btn, move |_| {
            state.navigate(View::FindBloodBanks);
            crate::rerender_app();
        })?;
    }

    let request_btn = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .text("Request Blood")
        .build();
    {
        let state = state.clone();
        on_click(&request_btn, move |_| {
            state.navigate(View::Login);
            crate::rerender_app();
        })?;
    }

    append_child(&actions, &find_btn)?;
    append_child(&actions, &request_btn)?;
    append_child(&hero, &title)?;
    append_child(&hero, &subtitle)?;
    append_child(&hero, &actions)?;
    append_child(&container, &hero)?;

    // Stats
    let stats = ElementBuilder::new("section")?.class("stats-section").build();
    append_child(&stats, &stat_card("250K+", "Lives Saved", "❤️")?)?;
    append_child(&stats, &stat_card("10K+", "Donors Registered", "🤝")?)?;
    append_child(&stats, &stat_card("500+", "Camps Organized", "📍")?)?;
    append_child(&container, &stats)?;

    // How it works
    let how = ElementBuilder::new("section")?.class("how-section").build();
    append_child(&how, &ElementBuilder::new("h2")?.text("How It Works").build())?;
    let steps = ElementBuilder::new("div")?.class("steps-grid").build();
    append_child(&steps, &step_card("📝", "Register", "Sign up as a donor, hospital, or doctor in minutes.")?)?;
    append_child(&steps, &step_card("🗓️", "Schedule", "Donors can schedule appointments, hospitals can request blood.")?)?;
    append_child(&steps, &step_card("🩸", "Donate/Receive", "Facilitating the vital connection between donors and recipients.")?)?;
    append_child(&how, &steps)?;
    append_child(&container, &how)?;

    // Testimonials
    let testimonials = ElementBuilder::new("section")?.class("testimonials-section").build();
    append_child(&testimonials, &ElementBuilder::new("h2")?.text("What Our Community Says").build())?;
    let grid = ElementBuilder::new("div")?.class("testimonials-grid").build();
    append_child(&grid, &testimonial_card(
        "BloodLink made it incredibly easy to find a nearby blood donation camp. The process was smooth and I felt like I truly made a difference.",
        "Priya Sharma, Donor",
        "PS",
    )?)?;
    append_child(&grid, &testimonial_card(
        "As a hospital, managing blood requests used to be complex. BloodLink's dashboard has streamlined everything, allowing us to serve patients faster.",
        "Dr. Anand Singh, Hospital Admin",
        "AS",
    )?)?;
    append_child(&testimonials, &grid)?;
    append_child(&container, &testimonials)?;

    Ok(container)
}
