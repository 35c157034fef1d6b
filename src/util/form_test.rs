use super::*;

fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect()
}

#[test]
fn serialize_fields_preserves_order() {
    let body = serialize_fields(&fields(&[
        ("csrfmiddlewaretoken", "token123"),
        ("judgment_uri", "ewhc/ch/2022/1"),
        ("assigned_to", "jane.doe"),
    ]));
    assert_eq!(
        body,
        "csrfmiddlewaretoken=token123&judgment_uri=ewhc%2Fch%2F2022%2F1&assigned_to=jane.doe"
    );
}

#[test]
fn serialize_fields_encodes_reserved_characters() {
    let body = serialize_fields(&fields(&[("q", "a b&c=d")]));
    assert_eq!(body, "q=a+b%26c%3Dd");
}

#[test]
fn serialize_fields_empty_list_is_empty_body() {
    assert_eq!(serialize_fields(&[]), "");
}

#[test]
fn field_value_finds_first_match() {
    let fields = fields(&[("a", "1"), ("b", "2"), ("a", "3")]);
    assert_eq!(field_value(&fields, "a"), Some("1"));
    assert_eq!(field_value(&fields, "b"), Some("2"));
    assert_eq!(field_value(&fields, "missing"), None);
}

#[test]
fn set_field_replaces_in_place() {
    let mut fields = fields(&[("judgment_uri", "x"), ("assigned_to", "jane.doe")]);
    set_field(&mut fields, "assigned_to", "john.doe");
    assert_eq!(
        fields,
        vec![
            ("judgment_uri".to_owned(), "x".to_owned()),
            ("assigned_to".to_owned(), "john.doe".to_owned()),
        ]
    );
}

#[test]
fn set_field_appends_when_absent() {
    let mut fields = fields(&[("judgment_uri", "x")]);
    set_field(&mut fields, "assigned_to", "jane.doe");
    assert_eq!(fields.len(), 2);
    assert_eq!(field_value(&fields, "assigned_to"), Some("jane.doe"));
}

#[test]
fn edit_link_percent_encodes_the_uri_segment() {
    assert_eq!(
        edit_link("ewhc/ch/2022/1"),
        "/ewhc%2Fch%2F2022%2F1/edit#assigned_to"
    );
}

#[test]
fn edit_link_escapes_like_encode_uri_component() {
    // Spaces become %20 (not +), and the JS unreserved set passes through.
    assert_eq!(edit_link("a b"), "/a%20b/edit#assigned_to");
    assert_eq!(edit_link("-_.!~*'()"), "/-_.!~*'()/edit#assigned_to");
    assert_eq!(edit_link("a+b"), "/a%2Bb/edit#assigned_to");
}
