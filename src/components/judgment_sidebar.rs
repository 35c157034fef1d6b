//! Sidebar assignment select.
//!
//! ARCHITECTURE
//! ============
//! The sidebar variant keeps its form across submissions: every change on
//! the assignee select re-submits, and the slot after the select cycles
//! through loading indicator, success notification, or failure notification.
//! The select is disabled while a request is in flight, so a new selection
//! cannot race an unresolved one.

#[cfg(test)]
#[path = "judgment_sidebar_test.rs"]
mod judgment_sidebar_test;

use leptos::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::state::submission::SubmissionState;
use crate::util::form;

/// One entry of the assignee select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssigneeOption {
    pub value: String,
    pub label: String,
}

/// Configuration extracted from one server-rendered sidebar assign form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarAssignConfig {
    /// POST target, taken from the form's `action` attribute verbatim.
    pub action: String,
    /// Name of the assignee select; its entry in `fields` tracks the
    /// current selection.
    pub select_name: String,
    /// Label of the form's (hidden) submit control.
    pub submit_label: String,
    /// Submitted fields in markup order, hidden csrf token included.
    pub fields: Vec<(String, String)>,
    /// Entries of the assignee select, in markup order.
    pub options: Vec<AssigneeOption>,
}

/// Current selection recorded in the fields, empty if the select has no
/// entry yet.
pub(crate) fn initial_selection(fields: &[(String, String)], select_name: &str) -> String {
    form::field_value(fields, select_name)
        .unwrap_or_default()
        .to_owned()
}

/// Assignment select for one judgment sidebar.
#[component]
pub fn SidebarAssignForm(config: SidebarAssignConfig) -> impl IntoView {
    let fields = RwSignal::new(config.fields.clone());
    let config = StoredValue::new(config);
    let state = RwSignal::new(SubmissionState::Idle);

    let submit_current = move || {
        if !state.get_untracked().can_begin() {
            return;
        }
        state.set(SubmissionState::Submitting);
        #[cfg(feature = "hydrate")]
        {
            let action = config.with_value(|c| c.action.clone());
            let body = fields.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_sidebar_assignment(&action, &body).await {
                    Ok(message) => state.set(SubmissionState::Resolved(message)),
                    Err(detail) => {
                        log::warn!("sidebar assignment failed: {detail}");
                        state.set(SubmissionState::Failed(detail));
                    }
                }
            });
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let selection = event_target_value(&ev);
        let select_name = config.with_value(|c| c.select_name.clone());
        fields.update(|f| form::set_field(f, &select_name, &selection));
        submit_current();
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_current();
    };

    let (action, select_name, submit_label, options) = config.with_value(|c| {
        (
            c.action.clone(),
            c.select_name.clone(),
            c.submit_label.clone(),
            c.options.clone(),
        )
    });
    let selected = initial_selection(&fields.get_untracked(), &select_name);
    let hidden_fields = fields
        .get_untracked()
        .into_iter()
        .filter(|(name, _)| name != &select_name)
        .map(|(name, value)| view! { <input type="hidden" name=name value=value/> })
        .collect_view();

    view! {
        <form
            class="judgment-sidebar__judgment-assign-form"
            action=action
            method="post"
            on:submit=on_submit
        >
            {hidden_fields}
            <select
                name=select_name
                disabled=move || state.get().is_submitting()
                on:change=on_change
            >
                {options
                    .into_iter()
                    .map(|option| {
                        let is_selected = option.value == selected;
                        view! {
                            <option value=option.value selected=is_selected>{option.label}</option>
                        }
                    })
                    .collect_view()}
            </select>
            <input type="submit" value=submit_label style="display: none;"/>
            {move || match state.get() {
                SubmissionState::Idle => ().into_any(),
                SubmissionState::Submitting => view! { <LoadingIndicator/> }.into_any(),
                SubmissionState::Resolved(message) => view! {
                    <div
                        class="context-notification--success judgment-sidebar__context-notification"
                        aria-busy="false"
                    >
                        {message}
                    </div>
                }
                    .into_any(),
                SubmissionState::Failed(detail) => view! {
                    <div
                        class="context-notification--error judgment-sidebar__context-notification"
                        aria-busy="false"
                    >
                        <span>{detail}</span>
                        <button
                            type="button"
                            class="judgment-sidebar__retry-control"
                            on:click=move |_| submit_current()
                        >
                            "Try again"
                        </button>
                    </div>
                }
                    .into_any(),
            }}
        </form>
    }
}
