// ============================================================================
// ABOUT VIEW - Mission, vision and team
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};

fn team_member_card(name: &str, role: &str, bio: &str, avatar_text: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("team-card").build();
    append_child(&card, &ElementBuilder::new("div")?.class("team-avatar").text(avatar_text).build())?;
    append_child(&card, &ElementBuilder::new("h3")?.text(name).build())?;
    append_child(&card, &ElementBuilder::new("p")?.class("team-role").text(role).build())?;
    append_child(&card, &ElementBuilder::new("p")?.class("team-bio").text(bio).build())?;
    Ok(card)
}

fn prose_section(title: &str, paragraphs: &[&str]) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("about-section").build();
    append_child(&section, &ElementBuilder::new("h2")?.text(title).build())?;
    for text in paragraphs {
        append_child(&section, &ElementBuilder::new("p")?.text(text).build())?;
    }
    Ok(section)
}

pub fn render_about() -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("page-container about").build();
    let heading = ElementBuilder::new("h1")?
        .class("page-title")
        .html("About <span class=\"accent\">BloodLink</span>")
        .build();
    append_child(&container, &heading)?;

    append_child(&container, &prose_section("Our Mission", &[
        "We aim to bridge the gap between voluntary blood donors and those in critical need, ensuring timely access to safe blood.",
        "We are committed to raising awareness about the importance of blood donation, simplifying the donation process, and providing robust tools for blood banks, hospitals, and medical professionals to manage their blood inventory effectively.",
    ])?)?;

    append_child(&container, &prose_section("Our Vision", &[
        "We strive to be the leading platform for blood management, fostering a community of compassionate donors and efficient healthcare providers.",
        "Through continuous innovation and user-centric design, we aim to set new standards in blood bank operations, making a profound impact on public health globally.",
    ])?)?;

    let team = ElementBuilder::new("section")?.class("team-section").build();
    append_child(&team, &ElementBuilder::new("h2")?.text("Meet Our Team").build())?;
    let grid = ElementBuilder::new("div")?.class("team-grid").build();
    append_child(&grid, &team_member_card("Jane Doe", "Founder & CEO", "Visionary leader passionate about healthcare technology.", "JD")?)?;
    append_child(&grid, &team_member_card("John Smith", "Lead Developer", "Crafting robust and scalable solutions for impact.", "JS")?)?;
    append_child(&grid, &team_member_card("Emily White", "Community Manager", "Connecting donors and promoting awareness.", "EW")?)?;
    append_child(&team, &grid)?;
    append_child(&container, &team)?;

    Ok(container)
}
