//! Accessible in-flight placeholder.

use leptos::prelude::*;

/// Progress placeholder shown while a request is in flight, announced
/// politely by assistive technology.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <span
            class="loading-indicator"
            role="progressbar"
            aria-valuetext="Loading"
            aria-busy="true"
            aria-live="polite"
        ></span>
    }
}
