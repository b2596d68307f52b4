//! Test data helpers for creating test objects
//!
//! This module provides the sample directory used across integration tests
//! and builders for typed inputs.

use serde_json::{json, Value};
use campus_directory::{CampusInput, StudentInput};

/// Campus ids in the sample directory
pub const NORTH_CAMPUS: i64 = 1;
pub const HARBOR_CAMPUS: i64 = 2;

/// Two campuses; the first has two enrolled students
pub fn sample_campuses_json() -> Value {
    json!([
        {
            "id": NORTH_CAMPUS,
            "name": "North Campus",
            "address": "100 College Avenue",
            "description": "Engineering and sciences",
            "imageUrl": "https://img.example.edu/north.png"
        },
        {
            "id": HARBOR_CAMPUS,
            "name": "Harbor Campus",
            "address": "12 Dock Road",
            "description": ""
        }
    ])
}

/// Students 10 and 11 at North, 12 at Harbor, 13 unenrolled
pub fn sample_students_json() -> Value {
    json!([
        {
            "id": 10,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@north.edu",
            "imageUrl": "https://img.example.edu/ada.png",
            "gpa": 3.9,
            "campusId": NORTH_CAMPUS,
            "createdAt": "2024-09-01T10:00:00Z"
        },
        {
            "id": 11,
            "firstName": "Alan",
            "lastName": "Turing",
            "email": "alan@north.edu",
            "gpa": 3.7,
            "campusId": NORTH_CAMPUS
        },
        {
            "id": 12,
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@harbor.edu",
            "campusId": HARBOR_CAMPUS
        },
        {
            "id": 13,
            "firstName": "Edsger",
            "lastName": "Dijkstra",
            "email": "edsger@example.edu",
            "gpa": 4.0,
            "campusId": null
        }
    ])
}

pub fn campus_input(name: &str) -> CampusInput {
    CampusInput {
        name: name.to_string(),
        address: "42 University Way".to_string(),
        description: Some("A new campus".to_string()),
        image_url: None,
    }
}

pub fn student_input(first_name: &str, campus_id: Option<i64>) -> StudentInput {
    StudentInput {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{}@example.edu", first_name.to_lowercase()),
        image_url: None,
        gpa: Some(3.2),
        campus_id,
    }
}
