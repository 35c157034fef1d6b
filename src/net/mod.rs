//! Networking modules for the assignment endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the urlencoded POST calls and validates each variant's
//! response shape before anything reaches the DOM.

pub mod api;
