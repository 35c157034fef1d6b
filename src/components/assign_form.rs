//! Judgments-list assignment form.
//!
//! ARCHITECTURE
//! ============
//! The server renders one assign form per judgment row; each mounted
//! instance owns its form's whole lifecycle. On success the form is gone for
//! good and a link to the judgment's edit page stands in its place, so the
//! row needs no further wiring. On failure the form comes back alongside an
//! inline error, which is the retry affordance.

#[cfg(test)]
#[path = "assign_form_test.rs"]
mod assign_form_test;

use leptos::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::state::submission::SubmissionState;
use crate::util::form;

/// Configuration extracted from one server-rendered assign form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignFormConfig {
    /// POST target, taken from the form's `action` attribute verbatim.
    pub action: String,
    /// Document identifier submitted with the form; also keys the edit link.
    pub judgment_uri: String,
    /// Submitted fields in markup order, hidden csrf token included.
    pub fields: Vec<(String, String)>,
    /// Label of the form's submit control.
    pub submit_label: String,
}

/// The `judgment_uri` field identifies the document being assigned.
pub(crate) fn judgment_uri_field(fields: &[(String, String)]) -> Option<&str> {
    form::field_value(fields, "judgment_uri")
}

/// Assignment form for one judgments-list row.
#[component]
pub fn AssignForm(config: AssignFormConfig) -> impl IntoView {
    let config = StoredValue::new(config);
    let state = RwSignal::new(SubmissionState::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.get_untracked().can_begin() {
            return;
        }
        state.set(SubmissionState::Submitting);
        #[cfg(feature = "hydrate")]
        {
            let (action, fields) = config.with_value(|c| (c.action.clone(), c.fields.clone()));
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_assignment(&action, &fields).await {
                    Ok(assigned_to) => state.set(SubmissionState::Resolved(assigned_to)),
                    Err(detail) => {
                        log::warn!("judgment assignment failed: {detail}");
                        state.set(SubmissionState::Failed(detail));
                    }
                }
            });
        }
    };

    move || match state.get() {
        SubmissionState::Idle => form_view(config, on_submit, None).into_any(),
        SubmissionState::Submitting => view! { <LoadingIndicator/> }.into_any(),
        SubmissionState::Resolved(assigned_to) => {
            let href = config.with_value(|c| form::edit_link(&c.judgment_uri));
            view! {
                <a aria-busy="false" href=href>{assigned_to}</a>
            }
            .into_any()
        }
        SubmissionState::Failed(detail) => form_view(config, on_submit, Some(detail)).into_any(),
    }
}

/// The idle form, optionally preceded by the failure notification.
fn form_view<F>(
    config: StoredValue<AssignFormConfig>,
    on_submit: F,
    error: Option<String>,
) -> impl IntoView
where
    F: Fn(leptos::ev::SubmitEvent) + Copy + Send + Sync + 'static,
{
    let (action, fields, submit_label) =
        config.with_value(|c| (c.action.clone(), c.fields.clone(), c.submit_label.clone()));
    view! {
        {error.map(|detail| view! {
            <div class="context-notification--error" aria-busy="false">{detail}</div>
        })}
        <form
            class="judgments-list__judgment-assign-form"
            action=action
            method="post"
            on:submit=on_submit
        >
            {fields
                .into_iter()
                .map(|(name, value)| view! { <input type="hidden" name=name value=value/> })
                .collect_view()}
            <input type="submit" value=submit_label/>
        </form>
    }
}
