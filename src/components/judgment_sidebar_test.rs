use super::*;

fn sidebar_fields() -> Vec<(String, String)> {
    vec![
        ("csrfmiddlewaretoken".to_owned(), "token123".to_owned()),
        ("judgment_uri".to_owned(), "ewhc/ch/2022/1".to_owned()),
        ("assigned_to".to_owned(), "jane.doe".to_owned()),
    ]
}

#[test]
fn initial_selection_reads_the_select_field() {
    assert_eq!(initial_selection(&sidebar_fields(), "assigned_to"), "jane.doe");
}

#[test]
fn initial_selection_is_empty_without_the_field() {
    assert_eq!(initial_selection(&sidebar_fields(), "priority"), "");
}

#[test]
fn changing_the_selection_keeps_field_order() {
    let mut fields = sidebar_fields();
    form::set_field(&mut fields, "assigned_to", "john.doe");
    assert_eq!(
        form::serialize_fields(&fields),
        "csrfmiddlewaretoken=token123&judgment_uri=ewhc%2Fch%2F2022%2F1&assigned_to=john.doe"
    );
}
