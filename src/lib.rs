//! # editor-client
//!
//! Leptos + WASM behavior layer for the judgment editor's server-rendered
//! pages. Replaces the jQuery enhancement bundle with a Rust-native component
//! layer: the server keeps rendering complete HTML, and this crate mounts one
//! controller per marker-classed node to drive asynchronous assignment
//! submission, facet visibility, and tab-state synchronization in place.
//!
//! This crate contains components, the submission state machine, network
//! helpers, and the document bootstrap. Browser-only dependencies sit behind
//! the `hydrate` feature so the crate builds and tests natively.

pub mod boot;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook, wire console logging, and
/// enhance the current document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    boot::enhance_document();
}
