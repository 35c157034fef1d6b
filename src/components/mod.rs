//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components mount over server-rendered markup discovered by `boot` and own
//! their subtree's behavior; instances never share state, so a page can
//! carry any number of each.

pub mod assign_form;
pub mod facet_toggle;
pub mod judgment_sidebar;
pub mod loading_indicator;
pub mod tab_set;
