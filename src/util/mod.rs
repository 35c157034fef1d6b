//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! to improve reuse and testability: `form` is pure and natively tested,
//! `dom` wraps scoped document queries for the browser build.

pub mod dom;
pub mod form;
