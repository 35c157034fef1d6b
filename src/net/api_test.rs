use super::*;

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(502), "assignment request failed: 502");
}

#[test]
fn parse_assigned_to_reads_the_display_value() {
    assert_eq!(
        parse_assigned_to(r#"{"assigned_to": "Jane Doe"}"#),
        Ok("Jane Doe".to_owned())
    );
}

#[test]
fn parse_assigned_to_rejects_missing_field() {
    assert_eq!(
        parse_assigned_to("{}"),
        Err("response missing assigned_to".to_owned())
    );
    assert_eq!(
        parse_assigned_to(r#"{"assigned_to": null}"#),
        Err("response missing assigned_to".to_owned())
    );
}

#[test]
fn parse_assigned_to_rejects_invalid_json() {
    assert!(parse_assigned_to("<html>").is_err());
    assert!(parse_assigned_to(r#"{"assigned_to": 7}"#).is_err());
}

#[test]
fn parse_message_reads_the_notification_text() {
    assert_eq!(
        parse_message(r#"{"message": "Assigned"}"#),
        Ok("Assigned".to_owned())
    );
}

#[test]
fn parse_message_rejects_missing_field() {
    assert_eq!(
        parse_message(r#"{"assigned_to": "Jane Doe"}"#),
        Err("response missing message".to_owned())
    );
}
