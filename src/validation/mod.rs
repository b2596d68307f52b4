//! Client-side validation
//!
//! Field rules and form state for the campus and student forms. Validation
//! failures are resolved here and never reach the network.

pub mod form;
pub mod rules;

pub use form::{
    validate_campus_input, validate_form, validate_student_input, CampusForm, FormState,
    StudentForm,
};
pub use rules::{validate_field, validate_named, Field};
