//! Student model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use super::fields;
use crate::utils::helpers::{blank_to_none, format_gpa};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(deserialize_with = "fields::id")]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "fields::optional_text", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "fields::optional_number", skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    /// `None` means unenrolled; always serialized so clearing it reaches the backend
    #[serde(default, deserialize_with = "fields::optional_id")]
    pub campus_id: Option<i64>,
    /// Backend fields this crate does not model, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating or replacing a student
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "fields::optional_text", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "fields::optional_number", skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(default, deserialize_with = "fields::optional_id")]
    pub campus_id: Option<i64>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// GPA with two decimals, if recorded
    pub fn gpa_display(&self) -> Option<String> {
        self.gpa.map(format_gpa)
    }

    pub fn is_enrolled(&self) -> bool {
        self.campus_id.is_some()
    }

    /// Copy of this record with only the enrollment changed
    pub fn with_campus(&self, campus_id: Option<i64>) -> Student {
        Student {
            campus_id,
            ..self.clone()
        }
    }

    /// Build the full record sent on update, keeping unmodelled fields
    pub fn with_input(&self, input: StudentInput) -> Student {
        Student {
            id: self.id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            image_url: input.image_url,
            gpa: input.gpa,
            campus_id: input.campus_id,
            extra: self.extra.clone(),
        }
    }

    /// Editable part of the record, e.g. to prefill an edit form
    pub fn to_input(&self) -> StudentInput {
        StudentInput {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            image_url: self.image_url.clone(),
            gpa: self.gpa,
            campus_id: self.campus_id,
        }
    }
}

impl StudentInput {
    /// Trim required text and fold blank optionals into `None`
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            image_url: blank_to_none(self.image_url.map(|u| u.trim().to_string())),
            gpa: self.gpa,
            campus_id: self.campus_id,
        }
    }
}
