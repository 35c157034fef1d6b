use super::*;

#[test]
fn default_state_is_idle() {
    assert_eq!(SubmissionState::default(), SubmissionState::Idle);
}

#[test]
fn idle_state_accepts_a_submission() {
    assert!(SubmissionState::Idle.can_begin());
    assert!(!SubmissionState::Idle.is_submitting());
}

#[test]
fn submitting_state_refuses_reentry() {
    assert!(!SubmissionState::Submitting.can_begin());
    assert!(SubmissionState::Submitting.is_submitting());
}

#[test]
fn resolved_state_accepts_a_new_submission() {
    let state = SubmissionState::Resolved("Jane Doe".to_owned());
    assert!(state.can_begin());
    assert!(!state.is_submitting());
}

#[test]
fn failed_state_accepts_a_retry() {
    let state = SubmissionState::Failed("assignment request failed: 502".to_owned());
    assert!(state.can_begin());
    assert!(!state.is_submitting());
}

#[test]
fn resolved_states_compare_by_display_value() {
    assert_eq!(
        SubmissionState::Resolved("Jane Doe".to_owned()),
        SubmissionState::Resolved("Jane Doe".to_owned())
    );
    assert_ne!(
        SubmissionState::Resolved("Jane Doe".to_owned()),
        SubmissionState::Resolved("John Doe".to_owned())
    );
    assert_ne!(
        SubmissionState::Resolved("Jane Doe".to_owned()),
        SubmissionState::Failed("Jane Doe".to_owned())
    );
}
