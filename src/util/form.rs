//! Form field serialization and edit-link building.
//!
//! Fields travel as an ordered list of name/value pairs from extraction
//! through serialization, so the POST body carries them in markup order —
//! the same order a regular form submission would.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped by JS `encodeURIComponent`: everything except
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Serialize fields into an `application/x-www-form-urlencoded` body,
/// preserving field order.
pub fn serialize_fields(fields: &[(String, String)]) -> String {
    let mut body = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in fields {
        body.append_pair(name, value);
    }
    body.finish()
}

/// Current value of the first field named `name`, if present.
pub fn field_value<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(field, _)| field == name)
        .map(|(_, value)| value.as_str())
}

/// Replace the value of the first field named `name`, or append the pair if
/// no such field exists yet.
pub fn set_field(fields: &mut Vec<(String, String)>, name: &str, value: &str) {
    match fields.iter_mut().find(|(field, _)| field == name) {
        Some((_, current)) => value.clone_into(current),
        None => fields.push((name.to_owned(), value.to_owned())),
    }
}

/// Edit-page link for a judgment, anchored at the assignment field.
///
/// The URI goes into a single path segment, so it is percent-encoded with
/// `encodeURIComponent` semantics (slashes become `%2F`).
pub fn edit_link(judgment_uri: &str) -> String {
    format!(
        "/{}/edit#assigned_to",
        utf8_percent_encode(judgment_uri, URI_COMPONENT)
    )
}
