use super::*;

#[test]
fn judgment_uri_field_reads_the_document_identifier() {
    let fields = vec![
        ("csrfmiddlewaretoken".to_owned(), "token123".to_owned()),
        ("judgment_uri".to_owned(), "ewhc/ch/2022/1".to_owned()),
    ];
    assert_eq!(judgment_uri_field(&fields), Some("ewhc/ch/2022/1"));
}

#[test]
fn judgment_uri_field_is_none_without_the_field() {
    let fields = vec![("csrfmiddlewaretoken".to_owned(), "token123".to_owned())];
    assert_eq!(judgment_uri_field(&fields), None);
}
