//! Named handlers for the form's input, blur, change, submit and clear events
//!
//! Each handler takes the form state, the field and value involved, and a
//! [`FeedbackSink`]; it updates the state synchronously and reports what the
//! UI should show.

use crate::controller;
use crate::feedback::{FeedbackEvent, FeedbackSink, FieldFeedback, StrengthMeter, SubmitOutcome};
use crate::state::FormState;
use crate::values::FormValues;
use regform_validation::{FieldId, RuleContext, ValidationResult};
use tracing::{debug, info};

fn apply(
    state: &mut FormState,
    sink: &mut impl FeedbackSink,
    field: FieldId,
    result: &ValidationResult,
) {
    state.apply(field, result);
    sink.emit(FeedbackEvent::Field(FieldFeedback::for_result(field, result)));
}

fn clear_feedback(sink: &mut impl FeedbackSink) {
    for field in FieldId::ALL {
        sink.emit(FeedbackEvent::Field(FieldFeedback::cleared(field)));
    }
    sink.emit(FeedbackEvent::Strength { meter: None });
}

/// Value edited. Records it; for the password also refreshes the strength meter.
pub fn on_input(state: &mut FormState, sink: &mut impl FeedbackSink, field: FieldId, value: &str) {
    state.set_value(field, value);

    if field == FieldId::Password {
        sink.emit(FeedbackEvent::Strength {
            meter: StrengthMeter::for_password(value),
        });
    }
}

/// Focus left `field`: validates its recorded value.
///
/// The confirmation is checked against the password as currently recorded.
pub fn on_blur(
    state: &mut FormState,
    sink: &mut impl FeedbackSink,
    field: FieldId,
) -> ValidationResult {
    let ctx = RuleContext::with_password(state.value(FieldId::Password));
    let result = controller::validate_field(field, state.value(field), &ctx);
    apply(state, sink, field, &result);
    result
}

/// Selection changed (the gender select): records and validates in one step
pub fn on_change(
    state: &mut FormState,
    sink: &mut impl FeedbackSink,
    field: FieldId,
    value: &str,
) -> ValidationResult {
    on_input(state, sink, field, value);
    on_blur(state, sink, field)
}

/// Form submitted: validates every field and reports the outcome.
///
/// On success the form is reset and every cue cleared, meter included.
pub fn on_submit(state: &mut FormState, sink: &mut impl FeedbackSink) -> SubmitOutcome {
    let values: FormValues = state
        .iter()
        .map(|f| (f.field_id, f.value.clone()))
        .collect();
    let validation = controller::validate_all(&values);

    for (field, result) in &validation.per_field {
        apply(state, sink, *field, result);
    }
    debug_assert_eq!(state.all_valid(), validation.all_valid);

    if validation.all_valid {
        info!("registration form accepted");
        sink.emit(FeedbackEvent::Submitted {
            outcome: SubmitOutcome::Accepted,
        });
        state.reset();
        clear_feedback(sink);
        SubmitOutcome::Accepted
    } else {
        debug!(failed = validation.failures().count(), "registration form rejected");
        sink.emit(FeedbackEvent::Submitted {
            outcome: SubmitOutcome::Rejected,
        });
        SubmitOutcome::Rejected
    }
}

/// External clear action: back to the initial state
pub fn on_clear(state: &mut FormState, sink: &mut impl FeedbackSink) {
    state.reset();
    clear_feedback(sink);
}
