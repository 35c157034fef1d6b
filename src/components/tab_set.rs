//! Tab set radio synchronization.
//!
//! Keeps the hidden radio inputs of a server-rendered tab strip in step with
//! anchor clicks, so CSS sibling selectors track the active tab. Requires a
//! browser environment; nothing here is compiled into native builds.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::util::dom;

/// Wire every tab set in the document.
#[cfg(feature = "hydrate")]
pub fn init(document: &web_sys::Document) {
    for container in dom::document_query_all(document, ".tabs-set") {
        init_one(&container);
    }
}

/// Wire one tab set container; item lookups stay scoped to its subtree.
#[cfg(feature = "hydrate")]
fn init_one(container: &web_sys::Element) {
    for item in dom::scoped_query_all(container, ".tabs-set__item") {
        let Some(anchor) = dom::scoped_find(&item, "a") else {
            continue;
        };
        let Some(input) = dom::scoped_find(&item, "input")
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            continue;
        };
        let on_click = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::Event)>::new(
            move |_event: web_sys::Event| {
                input.set_checked(true);
            },
        );
        let _ = anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        // Listeners live for the page lifetime.
        on_click.forget();
    }
}
