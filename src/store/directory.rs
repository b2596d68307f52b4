//! Directory store
//!
//! Owns the campus and student collections and is the only component that
//! talks to the directory API. Writes are never applied locally before the
//! backend accepts them, and any write that changes a student's enrollment
//! re-fetches both collections before returning.

use futures::future;
use tracing::{debug, info, warn};
use crate::config::{Settings, StoreConfig};
use crate::models::{Campus, CampusInput, Student, StudentInput};
use crate::services::DirectoryApi;
use crate::utils::errors::{DirectoryError, RemoteError, Result};
use crate::utils::logging::{log_store_operation, log_sync};
use crate::validation::rules::gpa_in_range;
use crate::validation::{validate_campus_input, validate_student_input};
use super::collection::Collection;
use super::views::{self, DirectorySummary};

/// Receipt for a deleted campus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampusRemoval {
    pub campus_id: i64,
    /// Students whose enrollment was cleared as part of the delete
    pub detached_students: Vec<i64>,
}

/// Single source of truth for campuses and students
#[derive(Debug)]
pub struct DirectoryStore {
    api: DirectoryApi,
    config: StoreConfig,
    campuses: Collection<Campus>,
    students: Collection<Student>,
}

impl DirectoryStore {
    /// Create a store with empty collections
    pub fn new(api: DirectoryApi, config: StoreConfig) -> Self {
        Self {
            api,
            config,
            campuses: Collection::new(),
            students: Collection::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api = DirectoryApi::new(&settings.api)?;
        Ok(Self::new(api, settings.store.clone()))
    }

    pub fn campuses(&self) -> &Collection<Campus> {
        &self.campuses
    }

    pub fn students(&self) -> &Collection<Student> {
        &self.students
    }

    /// Fetch all campuses; failures are recorded on the collection
    pub async fn list_campuses(&mut self) -> &Collection<Campus> {
        self.campuses.begin_load();
        let result = self.api.list_campuses().await;
        Self::apply_listing(&mut self.campuses, result, self.config.retain_on_failure, "campuses");
        &self.campuses
    }

    /// Fetch all students; failures are recorded on the collection
    pub async fn list_students(&mut self) -> &Collection<Student> {
        self.students.begin_load();
        let result = self.api.list_students().await;
        Self::apply_listing(&mut self.students, result, self.config.retain_on_failure, "students");
        &self.students
    }

    /// Re-fetch both collections. Returns whether both loads succeeded.
    pub async fn refresh(&mut self) -> bool {
        self.campuses.begin_load();
        self.students.begin_load();

        let (campuses, students) =
            future::join(self.api.list_campuses(), self.api.list_students()).await;

        let retain = self.config.retain_on_failure;
        Self::apply_listing(&mut self.campuses, campuses, retain, "campuses");
        Self::apply_listing(&mut self.students, students, retain, "students");

        let failed = self.campuses.is_failed() || self.students.is_failed();
        log_sync(self.campuses.len(), self.students.len(), failed);
        !failed
    }

    fn apply_listing<T: crate::services::Record>(
        collection: &mut Collection<T>,
        result: Result<Vec<T>>,
        retain: bool,
        name: &str,
    ) {
        match result {
            Ok(items) => {
                debug!(collection = name, count = items.len(), "Collection loaded");
                collection.replace(items);
            }
            Err(e) => {
                warn!(collection = name, error = %e, "Failed to load collection");
                collection.fail(e.to_string(), retain);
            }
        }
    }

    /// Mark a collection failed after a remote error on a single-record read.
    /// Items are always kept; a missing record is not a collection failure.
    fn record_read_failure<T: crate::services::Record>(
        collection: &mut Collection<T>,
        error: &DirectoryError,
        name: &str,
    ) {
        if let DirectoryError::Remote(_) = error {
            warn!(collection = name, error = %error, "Failed to read record");
            collection.fail(error.to_string(), true);
        }
    }

    /// Fetch one campus and merge it into the cache.
    ///
    /// A remote failure also marks `campuses()` as failed, keeping its items.
    pub async fn get_campus(&mut self, id: i64) -> Result<Campus> {
        match self.api.get_campus(id).await {
            Ok(campus) => {
                self.campuses.upsert(campus.clone());
                Ok(campus)
            }
            Err(e) => {
                Self::record_read_failure(&mut self.campuses, &e, "campuses");
                Err(e)
            }
        }
    }

    pub async fn create_campus(&mut self, input: CampusInput) -> Result<Campus> {
        let input = input.normalized();
        validate_campus_input(&input).into_result()?;

        let campus = self.api.create_campus(&input).await.map_err(|e| {
            log_store_operation("create", "campus", None, false);
            e
        })?;

        self.campuses.upsert(campus.clone());
        log_store_operation("create", "campus", Some(campus.id), true);
        Ok(campus)
    }

    pub async fn update_campus(&mut self, id: i64, input: CampusInput) -> Result<Campus> {
        let input = input.normalized();
        validate_campus_input(&input).into_result()?;

        let current = self.api.get_campus(id).await?;
        let campus = self.api.update_campus(&current.with_input(input)).await.map_err(|e| {
            log_store_operation("update", "campus", Some(id), false);
            e
        })?;

        self.campuses.upsert(campus.clone());
        log_store_operation("update", "campus", Some(id), true);
        Ok(campus)
    }

    /// Delete a campus and, when configured, unenroll its students
    ///
    /// Both collections are re-fetched afterwards. `Ok` does not mean the
    /// re-fetch succeeded; check `campuses()` and `students()` state.
    pub async fn delete_campus(&mut self, id: i64) -> Result<CampusRemoval> {
        self.api.delete_campus(id).await.map_err(|e| {
            log_store_operation("delete", "campus", Some(id), false);
            e
        })?;
        log_store_operation("delete", "campus", Some(id), true);

        let mut detached = Vec::new();
        let mut stranded = Vec::new();

        if self.config.detach_students_on_campus_delete {
            match self.api.list_students().await {
                Ok(students) => {
                    for student in students.iter().filter(|s| s.campus_id == Some(id)) {
                        match self.api.update_student(&student.with_campus(None)).await {
                            Ok(updated) => detached.push(updated.id),
                            Err(e) => {
                                warn!(campus_id = id, student_id = student.id, error = %e, "Failed to detach student");
                                stranded.push(student.id);
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!(campus_id = id, error = %e, "Could not list students to detach");
                    stranded.extend(views::enrolled_students(self.students.items(), id).iter().map(|s| s.id));
                }
            }
        }

        self.refresh().await;

        if !stranded.is_empty() {
            return Err(RemoteError::CascadeIncomplete {
                campus_id: id,
                student_ids: stranded,
            }
            .into());
        }

        info!(campus_id = id, detached = detached.len(), "Campus removed");
        Ok(CampusRemoval {
            campus_id: id,
            detached_students: detached,
        })
    }

    /// Fetch one student and merge it into the cache.
    ///
    /// A remote failure also marks `students()` as failed, keeping its items.
    pub async fn get_student(&mut self, id: i64) -> Result<Student> {
        match self.api.get_student(id).await {
            Ok(student) => {
                self.students.upsert(student.clone());
                Ok(student)
            }
            Err(e) => {
                Self::record_read_failure(&mut self.students, &e, "students");
                Err(e)
            }
        }
    }

    pub async fn create_student(&mut self, input: StudentInput) -> Result<Student> {
        let input = input.normalized();
        validate_student_input(&input).into_result()?;

        let student = self.api.create_student(&input).await.map_err(|e| {
            log_store_operation("create", "student", None, false);
            e
        })?;
        log_store_operation("create", "student", Some(student.id), true);

        if student.is_enrolled() {
            self.refresh().await;
        } else {
            self.students.upsert(student.clone());
        }
        Ok(student)
    }

    /// Replace a student's editable fields, including its enrollment
    pub async fn update_student(&mut self, id: i64, input: StudentInput) -> Result<Student> {
        let input = input.normalized();
        validate_student_input(&input).into_result()?;

        let current = self.api.get_student(id).await?;
        self.write_student(&current, current.with_input(input), "update").await
    }

    pub async fn delete_student(&mut self, id: i64) -> Result<()> {
        self.api.delete_student(id).await.map_err(|e| {
            log_store_operation("delete", "student", Some(id), false);
            e
        })?;

        self.students.remove(id);
        log_store_operation("delete", "student", Some(id), true);
        Ok(())
    }

    /// Enroll a student at an existing campus, keeping every other field
    ///
    /// Both collections are re-fetched after the write. `Ok` does not mean the
    /// re-fetch succeeded; check `campuses()` and `students()` state.
    pub async fn enroll_student(&mut self, student_id: i64, campus_id: i64) -> Result<Student> {
        self.api.get_campus(campus_id).await?;
        let current = self.api.get_student(student_id).await?;
        warn_on_stored_gpa(&current);
        self.write_student(&current, current.with_campus(Some(campus_id)), "enroll").await
    }

    /// Clear a student's enrollment, keeping every other field
    ///
    /// Both collections are re-fetched after the write. `Ok` does not mean the
    /// re-fetch succeeded; check `campuses()` and `students()` state.
    pub async fn unenroll_student(&mut self, student_id: i64) -> Result<Student> {
        let current = self.api.get_student(student_id).await?;
        warn_on_stored_gpa(&current);
        self.write_student(&current, current.with_campus(None), "unenroll").await
    }

    async fn write_student(&mut self, current: &Student, next: Student, operation: &str) -> Result<Student> {
        let student = self.api.update_student(&next).await.map_err(|e| {
            log_store_operation(operation, "student", Some(current.id), false);
            e
        })?;
        log_store_operation(operation, "student", Some(student.id), true);

        if student.campus_id != current.campus_id {
            self.refresh().await;
        } else {
            self.students.upsert(student.clone());
        }
        Ok(student)
    }

    pub fn enrolled_students(&self, campus_id: i64) -> Vec<&Student> {
        views::enrolled_students(self.students.items(), campus_id)
    }

    /// Enrolled students for a campus id taken from a route parameter
    pub fn enrolled_students_for_route(&self, raw_campus_id: &str) -> Result<Vec<&Student>> {
        views::enrolled_students_for_route(self.students.items(), raw_campus_id)
    }

    pub fn unenrolled_students(&self) -> Vec<&Student> {
        views::unenrolled_students(self.students.items())
    }

    pub fn display_unenrolled_students(&self) -> Vec<&Student> {
        views::display_unenrolled_students(self.students.items(), self.campuses.items())
    }

    pub fn campus_of(&self, student: &Student) -> Option<&Campus> {
        views::campus_of(self.campuses.items(), student)
    }

    pub fn find_campus_by_route(&self, raw_id: &str) -> Result<Option<&Campus>> {
        views::find_by_route(self.campuses.items(), raw_id)
    }

    pub fn find_student_by_route(&self, raw_id: &str) -> Result<Option<&Student>> {
        views::find_by_route(self.students.items(), raw_id)
    }

    pub fn summary(&self) -> DirectorySummary {
        views::summarize(self.campuses.items(), self.students.items())
    }
}

/// Enrollment writes send the stored GPA back unchanged, even when it is out of range
fn warn_on_stored_gpa(student: &Student) {
    if let Some(gpa) = student.gpa.filter(|gpa| !gpa_in_range(*gpa)) {
        warn!(student_id = student.id, gpa, "Stored GPA is outside 0.0-4.0; writing it back unchanged");
    }
}
