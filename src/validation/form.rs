//! Form state and form-level validation
//!
//! Forms keep raw text per field plus the set of touched fields. A field is
//! re-validated on blur, on change once touched, and every field is forced
//! touched on submit.

use std::collections::{BTreeMap, BTreeSet};
use crate::models::{Campus, CampusInput, Student, StudentInput};
use crate::utils::errors::{DirectoryError, Result, ValidationErrors};
use crate::utils::helpers::{blank_to_none, normalize_id};
use super::rules::{self, Field};

pub const CAMPUS_FIELDS: &[Field] = &[Field::Name, Field::Address, Field::Description, Field::ImageUrl];

pub const STUDENT_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::ImageUrl,
    Field::Gpa,
    Field::CampusId,
];

/// Run every field validator and collect the failures
pub fn validate_form<'a, I>(values: I) -> ValidationErrors
where
    I: IntoIterator<Item = (Field, &'a str)>,
{
    let mut errors = ValidationErrors::new();
    for (field, raw) in values {
        if let Some(message) = rules::validate_field(field, raw) {
            errors.insert(field.as_str(), message);
        }
    }
    errors
}

/// Re-check a typed campus payload before it is sent
pub fn validate_campus_input(input: &CampusInput) -> ValidationErrors {
    validate_form([
        (Field::Name, input.name.as_str()),
        (Field::Address, input.address.as_str()),
        (Field::ImageUrl, input.image_url.as_deref().unwrap_or("")),
    ])
}

/// Re-check a typed student payload before it is sent
pub fn validate_student_input(input: &StudentInput) -> ValidationErrors {
    let mut errors = validate_form([
        (Field::FirstName, input.first_name.as_str()),
        (Field::LastName, input.last_name.as_str()),
        (Field::Email, input.email.as_str()),
        (Field::ImageUrl, input.image_url.as_deref().unwrap_or("")),
    ]);

    if let Some(gpa) = input.gpa {
        if !gpa.is_finite() {
            errors.insert(Field::Gpa.as_str(), "GPA must be a number");
        } else if !rules::gpa_in_range(gpa) {
            errors.insert(Field::Gpa.as_str(), "GPA must be between 0.0 and 4.0");
        }
    }

    errors
}

/// Raw values, touched set and current errors of one form
#[derive(Debug, Clone)]
pub struct FormState {
    fields: &'static [Field],
    values: BTreeMap<Field, String>,
    touched: BTreeSet<Field>,
    errors: ValidationErrors,
}

impl FormState {
    pub fn new(fields: &'static [Field]) -> Self {
        Self {
            fields,
            values: BTreeMap::new(),
            touched: BTreeSet::new(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Store a new value; re-validates only if the field was already touched
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        if self.touched.contains(&field) {
            self.revalidate(field);
        }
    }

    /// Mark a field touched and validate it
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error to display next to a field
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field.as_str())
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Whether the form would pass, without touching any field
    pub fn is_valid(&self) -> bool {
        self.validate_all().is_empty()
    }

    /// Force every field touched and return the full error mapping
    pub fn touch_all(&mut self) -> &ValidationErrors {
        self.touched.extend(self.fields.iter().copied());
        self.errors = self.validate_all();
        &self.errors
    }

    fn validate_all(&self) -> ValidationErrors {
        validate_form(self.fields.iter().map(|&f| (f, self.value(f))))
    }

    fn revalidate(&mut self, field: Field) {
        match rules::validate_field(field, self.value(field)) {
            Some(message) => self.errors.insert(field.as_str(), message),
            None => self.errors.remove(field.as_str()),
        }
    }

    fn optional(&self, field: Field) -> Option<String> {
        blank_to_none(Some(self.value(field).trim().to_string()))
    }
}

/// Add / edit campus form
#[derive(Debug, Clone)]
pub struct CampusForm {
    state: FormState,
}

impl Default for CampusForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CampusForm {
    pub fn new() -> Self {
        Self { state: FormState::new(CAMPUS_FIELDS) }
    }

    /// Prefill from an existing record for editing
    pub fn from_campus(campus: &Campus) -> Self {
        let mut form = Self::new();
        form.state.values.insert(Field::Name, campus.name.clone());
        form.state.values.insert(Field::Address, campus.address.clone());
        form.state.values.insert(Field::Description, campus.description.clone().unwrap_or_default());
        form.state.values.insert(Field::ImageUrl, campus.image_url.clone().unwrap_or_default());
        form
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.state.set(field, value);
    }

    pub fn blur(&mut self, field: Field) {
        self.state.blur(field);
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.state.error(field)
    }

    /// Validate everything and produce the payload for the store
    pub fn submit(&mut self) -> Result<CampusInput> {
        let errors = self.state.touch_all().clone();
        errors.into_result()?;

        Ok(CampusInput {
            name: self.state.value(Field::Name).trim().to_string(),
            address: self.state.value(Field::Address).trim().to_string(),
            description: self.state.optional(Field::Description),
            image_url: self.state.optional(Field::ImageUrl),
        })
    }
}

/// Add / edit student form
#[derive(Debug, Clone)]
pub struct StudentForm {
    state: FormState,
}

impl Default for StudentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentForm {
    pub fn new() -> Self {
        Self { state: FormState::new(STUDENT_FIELDS) }
    }

    /// New student form preselecting the campus passed in the route query
    pub fn with_campus(campus_id: &str) -> Self {
        let mut form = Self::new();
        form.state.values.insert(Field::CampusId, campus_id.trim().to_string());
        form
    }

    /// Prefill from an existing record for editing
    pub fn from_student(student: &Student) -> Self {
        let mut form = Self::new();
        let values = &mut form.state.values;
        values.insert(Field::FirstName, student.first_name.clone());
        values.insert(Field::LastName, student.last_name.clone());
        values.insert(Field::Email, student.email.clone());
        values.insert(Field::ImageUrl, student.image_url.clone().unwrap_or_default());
        values.insert(Field::Gpa, student.gpa.map(|g| g.to_string()).unwrap_or_default());
        values.insert(Field::CampusId, student.campus_id.map(|c| c.to_string()).unwrap_or_default());
        form
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.state.set(field, value);
    }

    pub fn blur(&mut self, field: Field) {
        self.state.blur(field);
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.state.error(field)
    }

    /// Validate everything and produce the payload for the store
    pub fn submit(&mut self) -> Result<StudentInput> {
        let mut errors = self.state.touch_all().clone();

        let campus_id = match self.state.optional(Field::CampusId) {
            None => None,
            Some(raw) => match normalize_id(&raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.insert(Field::CampusId.as_str(), "Please select a valid campus");
                    None
                }
            },
        };

        if !errors.is_empty() {
            self.state.errors = errors.clone();
            return Err(DirectoryError::Validation(errors));
        }

        Ok(StudentInput {
            first_name: self.state.value(Field::FirstName).trim().to_string(),
            last_name: self.state.value(Field::LastName).trim().to_string(),
            email: self.state.value(Field::Email).trim().to_string(),
            image_url: self.state.optional(Field::ImageUrl),
            gpa: rules::parse_gpa(self.state.value(Field::Gpa)),
            campus_id,
        })
    }
}
