//! Scoped DOM query helpers for mounting over server-rendered markup.
//!
//! Every lookup is scoped to a given root so component instances only ever
//! see their own subtree. Requires a browser environment; nothing here is
//! compiled into native builds.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// All elements in the document matching `selector`, in document order.
#[cfg(feature = "hydrate")]
pub fn document_query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    collect_elements(document.query_selector_all(selector).ok())
}

/// All elements under `root` matching `selector`, in document order.
#[cfg(feature = "hydrate")]
pub fn scoped_query_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    collect_elements(root.query_selector_all(selector).ok())
}

/// First element under `root` matching `selector`.
#[cfg(feature = "hydrate")]
pub fn scoped_find(root: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    root.query_selector(selector).ok().flatten()
}

#[cfg(feature = "hydrate")]
#[cfg(feature = "hydrate")]
fn collect_elements(list: Option<web_sys::NodeList>) -> Vec<web_sys::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(element) = list
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            elements.push(element);
        }
    }
    elements
}
