// ============================================================================
// GALLERY VIEW - Photo grid of drives and campaigns
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};

struct GalleryImage {
    src: &'static str,
    alt: &'static str,
    title: &'static str,
}

const IMAGES: [GalleryImage; 6] = [
    GalleryImage { src: "assets/images/donation_drive_1.png", alt: "Donation Drive 1", title: "Community Donation Drive" },
    GalleryImage { src: "assets/images/blood_awareness_2.jpg", alt: "Awareness Event 2", title: "Blood Awareness Campaign" },
    GalleryImage { src: "assets/images/volunteers_work_3.png", alt: "Volunteer Work 3", title: "Volunteers in Action" },
    GalleryImage { src: "assets/images/impactful_donation_4.jpg", alt: "Success Story 4", title: "Impactful Donations" },
    GalleryImage { src: "assets/images/camp_setup_5.jpg", alt: "Camp Setup 5", title: "Setting Up a Camp" },
    GalleryImage { src: "assets/images/donor_appreciation_6.jpg", alt: "Donor Appreciation 6", title: "Appreciating Our Donors" },
];

pub fn render_gallery() -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("page-container gallery").build();
    let heading = ElementBuilder::new("h1")?
        .class("page-title")
        .html("Our <span class=\"accent\">Moments</span>")
        .build();
    append_child(&container, &heading)?;
    append_child(&container, &ElementBuilder::new("p")?
        .class("page-subtitle")
        .text("A visual journey through our blood donation drives, awareness programs, and the incredible impact of our community. Click on an image to view details.")
        .build())?;

    let grid = ElementBuilder::new("div")?.class("gallery-grid").build();
    for image in IMAGES.iter() {
        let card = ElementBuilder::new("div")?.class("gallery-card").build();
        let img = ElementBuilder::new("img")?
            .attr("src", image.src)?
            .attr("alt", image.alt)?
            .build();
        let caption = ElementBuilder::new("div")?.class("gallery-caption").build();
        append_child(&caption, &ElementBuilder::new("h3")?.text(image.title).build())?;
        append_child(&caption, &ElementBuilder::new("p")?.text(image.alt).build())?;
        append_child(&card, &img)?;
        append_child(&card, &caption)?;

        // Lightbox: clicking a card shows the image full-size in an overlay.
        let (src, alt, title) = (image.src, image.alt, image.title);
        let container_for_modal = container.clone();
        on_click(&card, move |_| {
            if let Ok(modal) = build_lightbox(src, alt, title) {
                let _ = container_for_modal.append_child(&modal);
            }
        })?;

        append_child(&grid, &card)?;
    }
    append_child(&container, &grid)?;

    Ok(container)
}

fn build_lightbox(src: &str, alt: &str, title: &str) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    let modal = ElementBuilder::new("div")?.class("modal gallery-modal").build();

    let close = ElementBuilder::new("button")?.class("modal-close").html("&times;").build();
    {
        let overlay = overlay.clone();
        on_click(&close, move |_| {
            overlay.remove();
        })?;
    }
    {
        let overlay_for_bg = overlay.clone();
        let modal_el = modal.clone();
        on_click(&overlay, move |e| {
            // Only a click on the backdrop itself closes the lightbox.
            if let Some(target) = e.target() {
                let node: web_sys::Node = wasm_bindgen::JsCast::unchecked_into(target);
                if !modal_el.contains(Some(&node)) {
                    overlay_for_bg.remove();
                }
            }
        })?;
    }

    let img = ElementBuilder::new("img")?.attr("src", src)?.attr("alt", alt)?.build();
    append_child(&modal, &close)?;
    append_child(&modal, &img)?;
    append_child(&modal, &ElementBuilder::new("h3")?.text(title).build())?;
    append_child(&modal, &ElementBuilder::new("p")?.text(alt).build())?;
    append_child(&overlay, &modal)?;
    Ok(overlay)
}
