//! # regform
//!
//! Validation and feedback core for a registration form. Field values go in,
//! typed results come out; applying those results to the screen is left to
//! whatever UI drives the form.
//!
//! ## Quick Start
//!
//! ```rust
//! use regform::{controller, FieldId, FormValues};
//!
//! let mut values = FormValues::new();
//! values.insert(FieldId::FullName, "Asha Rao");
//! values.insert(FieldId::Email, "asha@example.com");
//! values.insert(FieldId::Mobile, "9876543210");
//! values.insert(FieldId::Age, "29");
//! values.insert(FieldId::Gender, "female");
//! values.insert(FieldId::Password, "monsoon7!");
//! values.insert(FieldId::ConfirmPassword, "monsoon7!");
//!
//! let outcome = controller::validate_all(&values);
//! assert!(outcome.all_valid);
//!
//! let strength = controller::classify_strength("monsoon7!");
//! assert_eq!(strength.score, 3);
//! ```
//!
//! ## Architecture
//!
//! - **`regform-validation`** - the fixed per-field rules (re-exported as [`validation`])
//! - [`controller`] - full-form and single-field validation, strength scoring
//! - [`state`] - tri-state validity per field and the derived form verdict
//! - [`feedback`] - what a UI should show for a result (class, glyph, meter band)
//! - [`events`] - named input/blur/change/submit/clear handlers that update
//!   [`FormState`] and notify a [`FeedbackSink`]

pub mod controller;
pub mod events;
pub mod feedback;
pub mod state;
pub mod strength;
pub mod values;

pub use regform_validation as validation;
pub use regform_validation::{ErrorKind, FieldId, RuleContext, UnknownField, ValidationResult};

pub use controller::FormValidation;
pub use feedback::{FeedbackEvent, FeedbackSink, FieldFeedback, StrengthMeter, SubmitOutcome};
pub use state::{FieldState, FormState, Validity};
pub use strength::{StrengthLabel, StrengthResult};
pub use values::FormValues;
