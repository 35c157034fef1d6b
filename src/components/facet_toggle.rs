//! Search facet visibility toggle.
//!
//! ARCHITECTURE
//! ============
//! The trigger button is component-rendered into the results control
//! container, while the facet region itself stays server-rendered; the
//! component only flips that region's visibility through a callback. The
//! label swap is keyed off the current label text, not a boolean, to match
//! the markup contract of the search templates.

#[cfg(test)]
#[path = "facet_toggle_test.rs"]
mod facet_toggle_test;

use leptos::prelude::*;

/// Trigger labels and initial state for one facet toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetToggleOptions {
    /// Label shown once the region is collapsed (offers expansion).
    pub collapsed_text: String,
    /// Label shown while the region is expanded (offers collapse).
    pub expanded_text: String,
    /// Collapse the region once at mount instead of via default styling.
    pub initially_hidden: bool,
}

impl Default for FacetToggleOptions {
    fn default() -> Self {
        Self {
            collapsed_text: "Show filter options".to_owned(),
            expanded_text: "Hide filter options".to_owned(),
            initially_hidden: true,
        }
    }
}

/// Visibility and label state behind the trigger button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ToggleModel {
    pub visible: bool,
    pub collapsed: bool,
    pub label: String,
}

impl ToggleModel {
    /// Model for a region that starts visible with the expanded-state label.
    /// `initially_hidden` applies one activation up front, so the region
    /// starts hidden and the label already offers expansion.
    pub fn new(options: &FacetToggleOptions) -> Self {
        let mut model = Self {
            visible: true,
            collapsed: false,
            label: options.expanded_text.clone(),
        };
        if options.initially_hidden {
            model.activate(options);
        }
        model
    }

    /// One trigger activation: flip visibility and the collapsed marker,
    /// then swap the label based on its current text.
    pub fn activate(&mut self, options: &FacetToggleOptions) {
        self.visible = !self.visible;
        self.collapsed = !self.collapsed;
        self.label = if self.label == options.collapsed_text {
            options.expanded_text.clone()
        } else {
            options.collapsed_text.clone()
        };
    }
}

/// Facet toggle trigger. `on_visibility` receives the region's new
/// visibility on every change, including the initial state at mount.
#[component]
pub fn FacetToggle(options: FacetToggleOptions, on_visibility: Callback<bool>) -> impl IntoView {
    let model = RwSignal::new(ToggleModel::new(&options));
    on_visibility.run(model.get_untracked().visible);

    let on_click = move |_| {
        model.update(|m| m.activate(&options));
        on_visibility.run(model.get_untracked().visible);
    };

    view! {
        <button
            class="results-search-component__toggle-control"
            type="button"
            class:collapsed=move || model.get().collapsed
            on:click=on_click
        >
            {move || model.get().label}
        </button>
    }
}
