//! Document bootstrap: discovers server-rendered component roots and mounts
//! one controller per instance.
//!
//! ARCHITECTURE
//! ============
//! Each marker class is scanned independently and every match gets its own
//! component instance scoped to that subtree; instances share no state, so a
//! page may carry any number of each component. Nodes missing their expected
//! inner structure are skipped with a debug log rather than failing the
//! whole page. Call once per page load — repeated calls attach duplicate
//! listeners.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::components::assign_form::{self, AssignForm, AssignFormConfig};
#[cfg(feature = "hydrate")]
use crate::components::facet_toggle::{FacetToggle, FacetToggleOptions};
#[cfg(feature = "hydrate")]
use crate::components::judgment_sidebar::{AssigneeOption, SidebarAssignConfig, SidebarAssignForm};
#[cfg(feature = "hydrate")]
use crate::components::tab_set;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this judgment? Deletion is permanent.";

/// Enhance the current document: scan for every component's marker class and
/// mount one controller per match.
pub fn enhance_document() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        init_assign_forms(&document);
        init_judgment_sidebars(&document);
        init_facet_toggles(&document);
        tab_set::init(&document);
        init_delete_confirmation(&document);
    }
}

#[cfg(feature = "hydrate")]
fn init_assign_forms(document: &web_sys::Document) {
    for form_el in dom::document_query_all(document, ".judgments-list__judgment-assign-form") {
        let Some(form) = form_el.dyn_ref::<web_sys::HtmlFormElement>() else {
            log::debug!("skipping assign form: marker is not a form element");
            continue;
        };
        let Some(action) = form_el.get_attribute("action") else {
            log::debug!("skipping assign form: missing action attribute");
            continue;
        };
        let fields = collect_fields(form);
        let Some(judgment_uri) = assign_form::judgment_uri_field(&fields).map(ToOwned::to_owned)
        else {
            log::debug!("skipping assign form: missing judgment_uri field");
            continue;
        };
        let submit_label =
            submit_control_label(&form_el).unwrap_or_else(|| "Assign to me".to_owned());
        let config = AssignFormConfig {
            action,
            judgment_uri,
            fields,
            submit_label,
        };
        let Some(host) = replace_with_host(document, &form_el, "span") else {
            continue;
        };
        mount_into(host, move || view! { <AssignForm config=config/> });
    }
}

#[cfg(feature = "hydrate")]
fn init_judgment_sidebars(document: &web_sys::Document) {
    for sidebar in dom::document_query_all(document, ".judgment-sidebar") {
        let Some(form_el) = dom::scoped_find(&sidebar, ".judgment-sidebar__judgment-assign-form")
        else {
            log::debug!("skipping sidebar: no assign form in subtree");
            continue;
        };
        let Some(form) = form_el.dyn_ref::<web_sys::HtmlFormElement>() else {
            log::debug!("skipping sidebar assign form: marker is not a form element");
            continue;
        };
        let Some(action) = form_el.get_attribute("action") else {
            log::debug!("skipping sidebar assign form: missing action attribute");
            continue;
        };
        let Some(select) = dom::scoped_find(&form_el, "select")
            .and_then(|el| el.dyn_into::<web_sys::HtmlSelectElement>().ok())
        else {
            log::debug!("skipping sidebar assign form: no select control");
            continue;
        };
        let select_name = select.name();
        if select_name.is_empty() {
            log::debug!("skipping sidebar assign form: unnamed select control");
            continue;
        }
        let fields = collect_fields(form);
        let options = collect_assignee_options(&select);
        let submit_label = submit_control_label(&form_el).unwrap_or_else(|| "Assign".to_owned());
        let config = SidebarAssignConfig {
            action,
            select_name,
            submit_label,
            fields,
            options,
        };
        let Some(host) = replace_with_host(document, &form_el, "div") else {
            continue;
        };
        mount_into(host, move || view! { <SidebarAssignForm config=config/> });
    }
}

#[cfg(feature = "hydrate")]
fn init_facet_toggles(document: &web_sys::Document) {
    for wrapper in dom::document_query_all(document, ".js-results-facets-wrapper") {
        let Some(region) = dom::scoped_find(&wrapper, ".js-results-facets")
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            log::debug!("skipping facet toggle: no facets region in subtree");
            continue;
        };
        let Some(container) = dom::scoped_find(&wrapper, ".js-results-control-container")
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            log::debug!("skipping facet toggle: no control container in subtree");
            continue;
        };
        // The region handle is not Send; keep it in thread-local storage so
        // the callback itself can be.
        let region = StoredValue::new_local(region);
        let on_visibility = Callback::new(move |visible: bool| {
            region.with_value(|region| {
                let style = region.style();
                if visible {
                    let _ = style.remove_property("display");
                } else {
                    let _ = style.set_property("display", "none");
                }
            });
        });
        let options = FacetToggleOptions::default();
        mount_into(container, move || {
            view! { <FacetToggle options=options on_visibility=on_visibility/> }
        });
    }
}

#[cfg(feature = "hydrate")]
fn init_delete_confirmation(document: &web_sys::Document) {
    for control in dom::document_query_all(document, ".judgment-toolbar__delete") {
        let on_click = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::Event)>::new(
            move |event: web_sys::Event| {
                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message(DELETE_CONFIRMATION).ok())
                    .unwrap_or(false);
                if !confirmed {
                    event.prevent_default();
                }
            },
        );
        let _ = control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        // Listeners live for the page lifetime.
        on_click.forget();
    }
}

/// Submittable fields of a form in markup order: named, enabled inputs and
/// selects; submit and button controls are not part of the body.
#[cfg(feature = "hydrate")]
fn collect_fields(form: &web_sys::HtmlFormElement) -> Vec<(String, String)> {
    let elements = form.elements();
    let mut fields = Vec::new();
    for index in 0..elements.length() {
        let Some(element) = elements.item(index) else {
            continue;
        };
        if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
            let name = input.name();
            let kind = input.type_();
            if name.is_empty() || kind == "submit" || kind == "button" || input.disabled() {
                continue;
            }
            fields.push((name, input.value()));
        } else if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
            let name = select.name();
            if name.is_empty() || select.disabled() {
                continue;
            }
            fields.push((name, select.value()));
        }
    }
    fields
}

#[cfg(feature = "hydrate")]
fn collect_assignee_options(select: &web_sys::HtmlSelectElement) -> Vec<AssigneeOption> {
    let options = select.options();
    let mut assignees = Vec::new();
    for index in 0..options.length() {
        let Some(option) = options
            .item(index)
            .and_then(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
        else {
            continue;
        };
        assignees.push(AssigneeOption {
            value: option.value(),
            label: option.text(),
        });
    }
    assignees
}

#[cfg(feature = "hydrate")]
fn submit_control_label(form: &web_sys::Element) -> Option<String> {
    dom::scoped_find(form, "input[type='submit']")
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Swap `target` for a fresh `tag` element at the same position; the old
/// node is fully detached so none of its listeners survive.
#[cfg(feature = "hydrate")]
fn replace_with_host(
    document: &web_sys::Document,
    target: &web_sys::Element,
    tag: &str,
) -> Option<web_sys::HtmlElement> {
    let parent = target.parent_element()?;
    let host = document.create_element(tag).ok()?;
    parent.replace_child(&host, target).ok()?;
    host.dyn_into::<web_sys::HtmlElement>().ok()
}

/// Mounted components live for the page lifetime.
#[cfg(feature = "hydrate")]
fn mount_into<F, N>(host: web_sys::HtmlElement, component: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    std::mem::forget(leptos::mount::mount_to(host, component));
}
