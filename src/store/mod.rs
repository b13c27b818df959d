use async_trait::async_trait;
use derive_more::Display;

use crate::model::absence::AbsenceRecord;
use crate::model::admin::Admin;
use crate::model::class::Class;
use crate::model::student::Student;
use crate::model::teacher::Teacher;

pub mod memory;
pub mod seed;
pub mod sqlite;

#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "record not found")]
    NotFound,
    #[display(fmt = "username already taken")]
    UsernameTaken,
    #[display(fmt = "database error: {}", _0)]
    Database(sqlx::Error),
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Database(e)
    }
}

/// Partial update for a teacher account; `None` keeps the stored value.
/// The password, when present, is already hashed by the caller.
#[derive(Debug, Default, Clone)]
pub struct TeacherPatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Storage capability behind the request layer.
///
/// Classes, students and admins are reference data seeded at startup;
/// teachers support full CRUD; absence records are append-only. Backends
/// must keep each mutation atomic, but nothing here enforces referential
/// integrity: absence records may point at ids that no longer exist (or
/// never did), and queries still return them.
#[async_trait]
pub trait Store: Send + Sync {
    async fn teacher_by_id(&self, id: &str) -> Result<Option<Teacher>, StoreError>;
    async fn teacher_by_username(&self, username: &str) -> Result<Option<Teacher>, StoreError>;
    async fn list_teachers(&self) -> Result<Vec<Teacher>, StoreError>;
    /// Fails with `UsernameTaken` when the username is already in use.
    async fn insert_teacher(&self, teacher: Teacher) -> Result<(), StoreError>;
    /// Merges the patch into the stored record and returns the result.
    async fn update_teacher(&self, id: &str, patch: TeacherPatch) -> Result<Teacher, StoreError>;
    async fn delete_teacher(&self, id: &str) -> Result<(), StoreError>;

    async fn admin_by_id(&self, id: &str) -> Result<Option<Admin>, StoreError>;
    async fn admin_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError>;

    async fn list_classes(&self) -> Result<Vec<Class>, StoreError>;

    async fn list_students(&self) -> Result<Vec<Student>, StoreError>;
    async fn students_by_class(&self, class_id: &str) -> Result<Vec<Student>, StoreError>;

    async fn insert_absence(&self, record: AbsenceRecord) -> Result<(), StoreError>;
    async fn list_absences(&self) -> Result<Vec<AbsenceRecord>, StoreError>;
    async fn absences_by_teacher(&self, teacher_id: &str) -> Result<Vec<AbsenceRecord>, StoreError>;
    /// Inclusive on both ends; dates compare lexicographically, which is
    /// order-correct for zero-padded ISO dates.
    async fn absences_by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<AbsenceRecord>, StoreError>;
    async fn absences_by_class(&self, class_id: &str) -> Result<Vec<AbsenceRecord>, StoreError>;
    async fn absences_by_student(&self, student_id: &str)
    -> Result<Vec<AbsenceRecord>, StoreError>;
    /// Whether a record for the same (student, date, session) already exists.
    async fn absence_exists(
        &self,
        student_id: &str,
        date: &str,
        session: &str,
    ) -> Result<bool, StoreError>;
}
