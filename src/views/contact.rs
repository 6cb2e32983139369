// ============================================================================
// CONTACT VIEW - Message form + contact info panel
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_input, on_submit, ElementBuilder};
use crate::views::widgets::{flash_status, labeled_input, labeled_textarea, status_banner};

const CONTACT_STATUS_ID: &str = "contact-status";

pub fn render_contact() -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("page-container contact").build();
    let heading = ElementBuilder::new("h1")?
        .class("page-title")
        .html("Get In <span class=\"accent\">Touch</span>")
        .build();
    append_child(&container, &heading)?;

    let grid = ElementBuilder::new("div")?.class("contact-grid").build();

    // Form state lives in closures, like every other screen.
    let name = Rc::new(RefCell::new(String::new()));
    let email = Rc::new(RefCell::new(String::new()));
    let subject = Rc::new(RefCell::new(String::new()));
    let message = Rc::new(RefCell::new(String::new()));

    let form_card = ElementBuilder::new("div")?.class("contact-form-card").build();
    append_child(&form_card, &ElementBuilder::new("h2")?.text("Send Us a Message").build())?;
    let form = ElementBuilder::new("form")?.class("contact-form").build();

    let (name_field, name_input) = labeled_input("Name", "text", "", "Your Name")?;
    {
        let name = name.clone();
        on_input(&name_input, move |v| *name.borrow_mut() = v)?;
    }
    let (email_field, email_input) = labeled_input("Email", "email", "", "your.email@example.com")?;
    {
        let email = email.clone();
        on_input(&email_input, move |v| *email.borrow_mut() = v)?;
    }
    let (subject_field, subject_input) = labeled_input("Subject", "text", "", "Subject of your message")?;
    {
        let subject = subject.clone();
        on_input(&subject_input, move |v| *subject.borrow_mut() = v)?;
    }
    let (message_field, message_input) = labeled_textarea("Message", 6, "Your message here...")?;
    {
        let message = message.clone();
        on_input(&message_input, move |v| *message.borrow_mut() = v)?;
    }

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary btn-block")
        .attr("type", "submit")?
        .text("Send Message")
        .build();

    append_child(&form, &name_field)?;
    append_child(&form, &email_field)?;
    append_child(&form, &subject_field)?;
    append_child(&form, &message_field)?;
    append_child(&form, &submit)?;
    append_child(&form, &status_banner(CONTACT_STATUS_ID)?)?;

    // There is no contact endpoint yet; the form acks after a short delay.
    {
        let fields = [name.clone(), email.clone(), subject.clone(), message.clone()];
        let inputs = [name_input, email_input, subject_input, message_input.clone()];
        on_submit(&form, move || {
            flash_status(CONTACT_STATUS_ID, "Sending...");
            let fields = fields.clone();
            let inputs = inputs.clone();
            Timeout::new(2000, move || {
                log::info!("📨 Contact form submitted");
                flash_status(CONTACT_STATUS_ID, "Message Sent! We will get back to you soon.");
                for field in &fields {
                    field.borrow_mut().clear();
                }
                for input in &inputs {
                    let _ = input.set_attribute("value", "");
                    if let Some(input) = wasm_bindgen::JsCast::dyn_ref::<web_sys::HtmlInputElement>(input) {
                        input.set_value("");
                    }
                    if let Some(area) = wasm_bindgen::JsCast::dyn_ref::<web_sys::HtmlTextAreaElement>(input) {
                        area.set_value("");
                    }
                }
            })
            .forget();
        })?;
    }

    append_child(&form_card, &form)?;
    append_child(&grid, &form_card)?;

    // Contact info panel
    let info = ElementBuilder::new("div")?.class("contact-info-card").build();
    append_child(&info, &ElementBuilder::new("h2")?.text("Our Contact Information").build())?;
    for (label, value) in [
        ("Address:", "123 Blood Donor Lane, Lifesaving City, LS 12345"),
        ("Phone:", "+1 (555) 123-4567"),
        ("Email:", "info@bloodlink.org"),
    ] {
        let row = ElementBuilder::new("div")?.class("contact-info-row").build();
        append_child(&row, &ElementBuilder::new("p")?.class("contact-info-label").text(label).build())?;
        append_child(&row, &ElementBuilder::new("p")?.text(value).build())?;
        append_child(&info, &row)?;
    }
    append_child(&grid, &info)?;

    append_child(&container, &grid)?;
    Ok(container)
}
