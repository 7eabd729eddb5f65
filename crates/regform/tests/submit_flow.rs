//! End-to-end event flows: typing, blurring, submitting and clearing

use pretty_assertions::assert_eq;
use regform::events::{on_blur, on_change, on_clear, on_input, on_submit};
use regform::{FeedbackEvent, FieldFeedback, FieldId, FormState, SubmitOutcome, Validity};

fn fill_valid(state: &mut FormState, events: &mut Vec<FeedbackEvent>) {
    on_input(state, events, FieldId::FullName, "Asha Rao");
    on_input(state, events, FieldId::Email, "asha@example.com");
    on_input(state, events, FieldId::Mobile, "9876543210");
    on_input(state, events, FieldId::Age, "29");
    on_change(state, events, FieldId::Gender, "female");
    on_input(state, events, FieldId::Password, "monsoon7!");
    on_input(state, events, FieldId::ConfirmPassword, "monsoon7!");
}

#[test]
fn test_accepted_submit_resets_every_field() {
    let mut state = FormState::new();
    let mut events: Vec<FeedbackEvent> = Vec::new();
    fill_valid(&mut state, &mut events);
    events.clear();

    assert_eq!(on_submit(&mut state, &mut events), SubmitOutcome::Accepted);

    for field in state.iter() {
        assert_eq!(field.valid, Validity::Unknown);
        assert!(field.value.is_empty());
    }
    assert_eq!(state, FormState::new());

    // Seven applied results, the outcome, seven cleared cues, the hidden meter
    assert_eq!(events.len(), 7 + 1 + 7 + 1);
    assert_eq!(
        events[7],
        FeedbackEvent::Submitted {
            outcome: SubmitOutcome::Accepted
        }
    );
    assert_eq!(
        events[8],
        FeedbackEvent::Field(FieldFeedback::cleared(FieldId::FullName))
    );
    assert_eq!(events.last(), Some(&FeedbackEvent::Strength { meter: None }));
}

#[test]
fn test_rejected_submit_keeps_values_and_marks_failures() {
    let mut state = FormState::new();
    let mut events: Vec<FeedbackEvent> = Vec::new();
    fill_valid(&mut state, &mut events);
    on_input(&mut state, &mut events, FieldId::Age, "17");
    events.clear();

    assert_eq!(on_submit(&mut state, &mut events), SubmitOutcome::Rejected);
    assert_eq!(state.value(FieldId::Age), "17");
    assert_eq!(state.validity(FieldId::Age), Validity::Invalid);
    assert_eq!(state.validity(FieldId::FullName), Validity::Valid);
    assert!(!state.all_valid());
    assert_eq!(
        events.last(),
        Some(&FeedbackEvent::Submitted {
            outcome: SubmitOutcome::Rejected
        })
    );
}

#[test]
fn test_all_valid_follows_live_validation() {
    let mut state = FormState::new();
    let mut events: Vec<FeedbackEvent> = Vec::new();
    fill_valid(&mut state, &mut events);

    for field in FieldId::ALL {
        on_blur(&mut state, &mut events, field);
    }
    assert!(state.all_valid());

    on_input(&mut state, &mut events, FieldId::Email, "broken@");
    // Still valid until the field is validated again
    assert!(state.all_valid());
    on_blur(&mut state, &mut events, FieldId::Email);
    assert!(!state.all_valid());
}

#[test]
fn test_confirmation_blur_uses_current_password() {
    let mut state = FormState::new();
    let mut events: Vec<FeedbackEvent> = Vec::new();
    on_input(&mut state, &mut events, FieldId::Password, "monsoon7!");
    on_input(&mut state, &mut events, FieldId::ConfirmPassword, "monsoon7!");
    assert!(on_blur(&mut state, &mut events, FieldId::ConfirmPassword).valid);

    on_input(&mut state, &mut events, FieldId::Password, "monsoon8!");
    // The confirmation keeps its old state until it is blurred again
    assert_eq!(state.validity(FieldId::ConfirmPassword), Validity::Valid);
    assert!(!on_blur(&mut state, &mut events, FieldId::ConfirmPassword).valid);
}

#[test]
fn test_clear_after_partial_entry() {
    let mut state = FormState::new();
    let mut events: Vec<FeedbackEvent> = Vec::new();
    on_input(&mut state, &mut events, FieldId::FullName, "Al");
    on_blur(&mut state, &mut events, FieldId::FullName);
    assert_eq!(state.validity(FieldId::FullName), Validity::Invalid);

    on_clear(&mut state, &mut events);
    assert_eq!(state, FormState::new());
}
