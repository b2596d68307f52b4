//! Field-level validation rules
//!
//! Each rule maps a raw form value to an error message, or `None` when the
//! value is acceptable. Rules are pure and never touch the network.

use std::fmt;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref IMAGE_URL: Regex = Regex::new(r"(?i)^https?://.+").unwrap();
}

pub const NAME_MIN_LEN: usize = 2;
pub const ADDRESS_MIN_LEN: usize = 5;
pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

/// Every form field the directory knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Address,
    Description,
    ImageUrl,
    FirstName,
    LastName,
    Email,
    Gpa,
    CampusId,
}

impl Field {
    /// Wire and form name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::Description => "description",
            Field::ImageUrl => "imageUrl",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Gpa => "gpa",
            Field::CampusId => "campusId",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        let field = match name {
            "name" => Field::Name,
            "address" => Field::Address,
            "description" => Field::Description,
            "imageUrl" => Field::ImageUrl,
            "firstName" => Field::FirstName,
            "lastName" => Field::LastName,
            "email" => Field::Email,
            "gpa" => Field::Gpa,
            "campusId" => Field::CampusId,
            _ => return None,
        };
        Some(field)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate one raw field value
pub fn validate_field(field: Field, raw: &str) -> Option<String> {
    match field {
        Field::Name => required_min(raw, NAME_MIN_LEN, "Campus name is required", "Name must be at least 2 characters"),
        Field::Address => required_min(raw, ADDRESS_MIN_LEN, "Address is required", "Address must be at least 5 characters"),
        Field::FirstName => required_min(raw, NAME_MIN_LEN, "First name is required", "First name must be at least 2 characters"),
        Field::LastName => required_min(raw, NAME_MIN_LEN, "Last name is required", "Last name must be at least 2 characters"),
        Field::Email => validate_email(raw),
        Field::ImageUrl => validate_image_url(raw),
        Field::Gpa => validate_gpa(raw),
        Field::Description | Field::CampusId => None,
    }
}

/// Validate a field given by its form name; unknown names always pass
pub fn validate_named(name: &str, raw: &str) -> Option<String> {
    Field::from_name(name).and_then(|field| validate_field(field, raw))
}

fn required_min(raw: &str, min_len: usize, missing: &str, too_short: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Some(missing.to_string())
    } else if trimmed.chars().count() < min_len {
        Some(too_short.to_string())
    } else {
        None
    }
}

pub fn validate_email(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    if !EMAIL.is_match(raw) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

pub fn validate_image_url(raw: &str) -> Option<String> {
    if !raw.is_empty() && !IMAGE_URL.is_match(raw) {
        return Some("Please enter a valid URL".to_string());
    }
    None
}

pub fn validate_gpa(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    match parse_gpa(raw) {
        None => Some("GPA must be a number".to_string()),
        Some(gpa) if !gpa_in_range(gpa) => Some("GPA must be between 0.0 and 4.0".to_string()),
        Some(_) => None,
    }
}

/// Parse a GPA entry; blank or non-numeric text yields `None`
pub fn parse_gpa(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|gpa| gpa.is_finite())
}

pub fn gpa_in_range(gpa: f64) -> bool {
    (GPA_MIN..=GPA_MAX).contains(&gpa)
}
