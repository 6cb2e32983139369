// ============================================================================
// EVENT HANDLING - Closure helpers for DOM listeners
// ============================================================================
// MEMORY NOTES:
// - Listeners on elements: when the element goes away (set_inner_html("") on
//   a re-render), the browser drops the listener with it, so closure.forget()
//   is safe for element-local handlers.
// - Listeners on window/document must only be registered ONCE at startup or
//   they accumulate across re-renders.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};

pub fn on_click<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: MouseEvent| handler(e)) as Box<dyn FnMut(_)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// `input` events; the handler receives the current value.
pub fn on_input<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        if let Some(value) = target_value(&e) {
            handler(value);
        }
    }) as Box<dyn FnMut(_)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// `change` events for selects and checkboxes.
pub fn on_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| handler(e)) as Box<dyn FnMut(_)>);
    element.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Form submit with default prevented.
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(_)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Pull the value out of whichever form control fired the event.
pub fn target_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    None
}

/// Checkbox state for `change` events.
pub fn target_checked(event: &Event) -> Option<bool> {
    let target = event.target()?;
    target
        .dyn_ref::<HtmlInputElement>()
        .map(|input| input.checked())
}
