// ============================================================================
// CHATBOT VIEW - Floating assistant widget
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_input, on_submit, scroll_into_view, ElementBuilder};
use crate::services::chat_service::{send_chat, ChatMessage};

pub fn render_chatbot() -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("chatbot-root").build();

    let open = Rc::new(RefCell::new(false));
    let history: Rc<RefCell<Vec<ChatMessage>>> = Rc::new(RefCell::new(Vec::new()));
    let sending = Rc::new(RefCell::new(false));

    let toggle = ElementBuilder::new("button")?
        .class("chatbot-toggle")
        .attr("aria-label", "Open Chatbot")?
        .text("💬")
        .build();

    let window_el = ElementBuilder::new("div")?.class("chatbot-window hidden").build();

    // Header
    let header = ElementBuilder::new("div")?.class("chatbot-header").build();
    append_child(&header, &ElementBuilder::new("h3")?.text("BloodLink Chatbot").build())?;
    let close = ElementBuilder::new("button")?.class("chatbot-close").html("&times;").build();
    append_child(&header, &close)?;
    append_child(&window_el, &header)?;

    // Transcript
    let transcript = ElementBuilder::new("div")?.class("chatbot-messages").build();
    let hint = ElementBuilder::new("div")?
        .class("chatbot-hint")
        .text("Type a question about blood donation, eligibility, or procedures!")
        .build();
    append_child(&transcript, &hint)?;
    append_child(&window_el, &transcript)?;

    // Input row
    let form = ElementBuilder::new("form")?.class("chatbot-input-row").build();
    let input = ElementBuilder::new("input")?
        .class("chatbot-input")
        .attr("type", "text")?
        .attr("placeholder", "Ask a question...")?
        .build();
    let send = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("Send")
        .build();
    append_child(&form, &input)?;
    append_child(&form, &send)?;
    append_child(&window_el, &form)?;

    // Toggle open/closed
    {
        let open = open.clone();
        let window_el = window_el.clone();
        on_click(&toggle, move |_| {
            let now_open = !*open.borrow();
            *open.borrow_mut() = now_open;
            window_el.set_class_name(if now_open {
                "chatbot-window"
            } else {
                "chatbot-window hidden"
            });
        })?;
    }
    {
        let open = open.clone();
        let window_el = window_el.clone();
        on_click(&close, move |_| {
            *open.borrow_mut() = false;
            window_el.set_class_name("chatbot-window hidden");
        })?;
    }

    // Track the draft message
    let draft = Rc::new(RefCell::new(String::new()));
    {
        let draft = draft.clone();
        on_input(&input, move |v| *draft.borrow_mut() = v)?;
    }

    // Send: append the user message, call the model, append the reply.
    {
        let draft = draft.clone();
        let history = history.clone();
        let sending = sending.clone();
        let transcript = transcript.clone();
        let input = input.clone();
        on_submit(&form, move || {
            let text = draft.borrow().trim().to_string();
            if text.is_empty() || *sending.borrow() {
                return;
            }
            draft.borrow_mut().clear();
            if let Some(input) = wasm_bindgen::JsCast::dyn_ref::<web_sys::HtmlInputElement>(&input) {
                input.set_value("");
            }

            history.borrow_mut().push(ChatMessage::user(&text));
            let _ = append_bubble(&transcript, "user", &text);
            let _ = set_typing(&transcript, true);
            *sending.borrow_mut() = true;

            let history = history.clone();
            let sending = sending.clone();
            let transcript = transcript.clone();
            spawn_local(async move {
                let snapshot = history.borrow().clone();
                let reply = match send_chat(&snapshot).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        log::error!("❌ Chatbot error: {}", e);
                        "Sorry, I could not get a response. Please try again.".to_string()
                    }
                };
                history.borrow_mut().push(ChatMessage::model(&reply));
                *sending.borrow_mut() = false;
                let _ = set_typing(&transcript, false);
                let _ = append_bubble(&transcript, "model", &reply);
            });
        })?;
    }

    append_child(&root, &toggle)?;
    append_child(&root, &window_el)?;
    Ok(root)
}

fn append_bubble(transcript: &Element, role: &str, text: &str) -> Result<(), JsValue> {
    let class = if role == "user" {
        "chat-bubble chat-user"
    } else {
        "chat-bubble chat-model"
    };
    let bubble = ElementBuilder::new("div")?.class(class).text(text).build();
    append_child(transcript, &bubble)?;
    scroll_into_view(&bubble);
    Ok(())
}

fn set_typing(transcript: &Element, show: bool) -> Result<(), JsValue> {
    const TYPING_ID: &str = "chatbot-typing";
    if show {
        let bubble = ElementBuilder::new("div")?
            .class("chat-bubble chat-model")
            .id(TYPING_ID)?
            .text("Typing...")
            .build();
        append_child(transcript, &bubble)?;
        scroll_into_view(&bubble);
    } else if let Some(bubble) = crate::dom::get_element_by_id(TYPING_ID) {
        bubble.remove();
    }
    Ok(())
}
