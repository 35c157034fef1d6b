//! Assignment endpoint helpers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Native builds:
//! stubs returning an error since these endpoints are only meaningful in the
//! browser. Requests carry `X-Requested-With: XMLHttpRequest` so the server
//! answers with JSON instead of a redirect.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<String, String>`: a rejected request, a non-OK
//! status, or a response missing the expected field all surface as an
//! explicit failure the form can render with a retry affordance, instead of
//! a loading indicator that never resolves.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use crate::util::form::serialize_fields;

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("assignment request failed: {status}")
}

/// Pull the `assigned_to` display value out of a response body, refusing
/// bodies that parse but lack the field.
#[cfg(any(test, feature = "hydrate"))]
fn parse_assigned_to(body: &str) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct AssignResponse {
        assigned_to: Option<String>,
    }
    let parsed: AssignResponse = serde_json::from_str(body).map_err(|e| e.to_string())?;
    parsed
        .assigned_to
        .ok_or_else(|| "response missing assigned_to".to_owned())
}

/// Pull the `message` display value out of a sidebar response body.
#[cfg(any(test, feature = "hydrate"))]
fn parse_message(body: &str) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct SidebarResponse {
        message: Option<String>,
    }
    let parsed: SidebarResponse = serde_json::from_str(body).map_err(|e| e.to_string())?;
    parsed
        .message
        .ok_or_else(|| "response missing message".to_owned())
}

/// Submit a judgments-list assignment form, returning the editor display
/// name from the response's `assigned_to` field.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the response is missing `assigned_to`.
pub async fn submit_assignment(
    action: &str,
    fields: &[(String, String)],
) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(action)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("X-Requested-With", "XMLHttpRequest")
            .body(serialize_fields(fields))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        parse_assigned_to(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (action, fields);
        Err("not available outside the browser".to_owned())
    }
}

/// Submit a sidebar assignment form, returning the notification text from
/// the response's `message` field.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the response is missing `message`.
pub async fn submit_sidebar_assignment(
    action: &str,
    fields: &[(String, String)],
) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(action)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("X-Requested-With", "XMLHttpRequest")
            .body(serialize_fields(fields))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        parse_message(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (action, fields);
        Err("not available outside the browser".to_owned())
    }
}
