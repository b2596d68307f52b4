//! Derived views over the in-memory collections
//!
//! All functions here are pure projections; none of them touch the network.

use crate::models::{Campus, Student};
use crate::services::Record;
use crate::utils::errors::Result;
use crate::utils::helpers::normalize_id;

/// Counts shown on the directory landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectorySummary {
    pub campuses: usize,
    pub students: usize,
    pub enrolled: usize,
    pub unenrolled: usize,
    /// Students whose `campusId` points at no known campus
    pub dangling: usize,
}

/// Students enrolled at `campus_id`
pub fn enrolled_students(students: &[Student], campus_id: i64) -> Vec<&Student> {
    students
        .iter()
        .filter(|s| s.campus_id == Some(campus_id))
        .collect()
}

/// Students enrolled at the campus named by a route parameter
pub fn enrolled_students_for_route<'a>(students: &'a [Student], raw_campus_id: &str) -> Result<Vec<&'a Student>> {
    let campus_id = normalize_id(raw_campus_id)?;
    Ok(enrolled_students(students, campus_id))
}

/// Students with no `campusId` at all
pub fn unenrolled_students(students: &[Student]) -> Vec<&Student> {
    students.iter().filter(|s| s.campus_id.is_none()).collect()
}

/// Students to list as unenrolled, counting references to unknown campuses
pub fn display_unenrolled_students<'a>(students: &'a [Student], campuses: &[Campus]) -> Vec<&'a Student> {
    students
        .iter()
        .filter(|s| campus_of(campuses, s).is_none())
        .collect()
}

/// The campus a student is enrolled at, if it exists
pub fn campus_of<'a>(campuses: &'a [Campus], student: &Student) -> Option<&'a Campus> {
    let campus_id = student.campus_id?;
    campuses.iter().find(|c| c.id == campus_id)
}

/// Look a record up by a route parameter such as `"7"`
pub fn find_by_route<'a, R: Record>(records: &'a [R], raw_id: &str) -> Result<Option<&'a R>> {
    let id = normalize_id(raw_id)?;
    Ok(records.iter().find(|r| r.id() == id))
}

pub fn summarize(campuses: &[Campus], students: &[Student]) -> DirectorySummary {
    let enrolled = students.iter().filter(|s| s.campus_id.is_some()).count();
    let dangling = students
        .iter()
        .filter(|s| s.campus_id.is_some() && campus_of(campuses, s).is_none())
        .count();

    DirectorySummary {
        campuses: campuses.len(),
        students: students.len(),
        enrolled,
        unenrolled: students.len() - enrolled,
        dangling,
    }
}
