//! Registration Form Validation Rules
//!
//! Pure predicates for every field of the registration form, plus the fixed
//! rule table that binds each field to its predicate and failure kind.
//! Nothing in here touches a UI; the same functions back the form
//! controller, the WASM bindings and the command-line checker.

pub mod field;
pub mod numeric;
pub mod password;
pub mod rules;
pub mod string;

pub use field::{ErrorKind, FieldId, UnknownField, ValidationResult};
pub use rules::{validate, FieldSpec, RuleContext, FIELD_SPECS};
