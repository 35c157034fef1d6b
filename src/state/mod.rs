//! Client-side state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! State here is per-instance and lives inside the component that owns it;
//! there is no shared store across instances. Models are plain types so the
//! lifecycle rules can be exercised natively.

pub mod submission;
