use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::info;

use super::{Store, StoreError, TeacherPatch, seed};
use crate::model::absence::AbsenceRecord;
use crate::model::admin::Admin;
use crate::model::class::Class;
use crate::model::student::Student;
use crate::model::teacher::Teacher;

// Absence columns carry no foreign keys: records must outlive the teacher,
// student or class they mention, and may reference ids that never existed.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS teachers (
        id       TEXT PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        name     TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS admins (
        id       TEXT PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        name     TEXT NOT NULL,
        role     TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS classes (
        id   TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        year TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS students (
        id       TEXT PRIMARY KEY,
        name     TEXT NOT NULL,
        class_id TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_students_class ON students (class_id)",
    "CREATE TABLE IF NOT EXISTS absences (
        id         TEXT PRIMARY KEY,
        student_id TEXT NOT NULL,
        class_id   TEXT NOT NULL,
        teacher_id TEXT NOT NULL,
        date       TEXT NOT NULL,
        session    TEXT NOT NULL,
        timestamp  TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_absences_teacher ON absences (teacher_id)",
    "CREATE INDEX IF NOT EXISTS idx_absences_class ON absences (class_id)",
    "CREATE INDEX IF NOT EXISTS idx_absences_student ON absences (student_id)",
    "CREATE INDEX IF NOT EXISTS idx_absences_date ON absences (date)",
];

/// Durable store backed by an embedded SQLite database. Rows are returned
/// in insertion order (`rowid`), matching what the in-memory store does
/// with its vectors.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init_schema(&self) -> anyhow::Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Loads the reference dataset on first run. The guard counts admins,
    /// the one seeded table no endpoint mutates; a database that was seeded
    /// once stays untouched on reboot even after every teacher is deleted.
    pub async fn seed_if_empty(&self) -> anyhow::Result<()> {
        let admins: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await?;
        if admins > 0 {
            return Ok(());
        }

        let data = seed::seed_data();
        let mut tx = self.pool.begin().await?;
        for t in &data.teachers {
            sqlx::query("INSERT INTO teachers (id, username, password, name) VALUES (?, ?, ?, ?)")
                .bind(&t.id)
                .bind(&t.username)
                .bind(&t.password)
                .bind(&t.name)
                .execute(&mut *tx)
                .await?;
        }
        for a in &data.admins {
            sqlx::query(
                "INSERT INTO admins (id, username, password, name, role) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&a.id)
            .bind(&a.username)
            .bind(&a.password)
            .bind(&a.name)
            .bind(a.role)
            .execute(&mut *tx)
            .await?;
        }
        for c in &data.classes {
            sqlx::query("INSERT INTO classes (id, name, year) VALUES (?, ?, ?)")
                .bind(&c.id)
                .bind(&c.name)
                .bind(&c.year)
                .execute(&mut *tx)
                .await?;
        }
        for s in &data.students {
            sqlx::query("INSERT INTO students (id, name, class_id) VALUES (?, ?, ?)")
                .bind(&s.id)
                .bind(&s.name)
                .bind(&s.class_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        info!("Seeded reference data into an empty database");
        Ok(())
    }

    async fn absences_where(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Vec<AbsenceRecord>, StoreError> {
        let sql = format!(
            "SELECT id, student_id, class_id, teacher_id, date, session, timestamp \
             FROM absences WHERE {column} = ? ORDER BY rowid"
        );
        Ok(sqlx::query_as::<_, AbsenceRecord>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await?)
    }
}

fn map_unique_violation(e: sqlx::Error) -> StoreError {
    if e.as_database_error()
        .map_or(false, |db| db.is_unique_violation())
    {
        StoreError::UsernameTaken
    } else {
        StoreError::Database(e)
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn teacher_by_id(&self, id: &str) -> Result<Option<Teacher>, StoreError> {
        Ok(
            sqlx::query_as::<_, Teacher>(
                "SELECT id, username, password, name FROM teachers WHERE id = ?",
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?,
        )
    }

    async fn teacher_by_username(&self, username: &str) -> Result<Option<Teacher>, StoreError> {
        Ok(
            sqlx::query_as::<_, Teacher>(
                "SELECT id, username, password, name FROM teachers WHERE username = ?",
            )
            .bind(username)
            .fetch_optional(&self.pool)
            .await?,
        )
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        Ok(sqlx::query_as::<_, Teacher>(
            "SELECT id, username, password, name FROM teachers ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_teacher(&self, teacher: Teacher) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO teachers (id, username, password, name) VALUES (?, ?, ?, ?)")
            .bind(&teacher.id)
            .bind(&teacher.username)
            .bind(&teacher.password)
            .bind(&teacher.name)
            .execute(&self.pool)
            .await
            .map_err(map_unique_violation)?;
        Ok(())
    }

    async fn update_teacher(&self, id: &str, patch: TeacherPatch) -> Result<Teacher, StoreError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Teacher>(
            "SELECT id, username, password, name FROM teachers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StoreError::NotFound)?;

        let updated = Teacher {
            id: current.id,
            username: patch.username.unwrap_or(current.username),
            password: patch.password.unwrap_or(current.password),
            name: patch.name.unwrap_or(current.name),
        };

        sqlx::query("UPDATE teachers SET username = ?, password = ?, name = ? WHERE id = ?")
            .bind(&updated.username)
            .bind(&updated.password)
            .bind(&updated.name)
            .bind(&updated.id)
            .execute(&mut *tx)
            .await
            .map_err(map_unique_violation)?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete_teacher(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn admin_by_id(&self, id: &str) -> Result<Option<Admin>, StoreError> {
        Ok(sqlx::query_as::<_, Admin>(
            "SELECT id, username, password, name, role FROM admins WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn admin_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError> {
        Ok(sqlx::query_as::<_, Admin>(
            "SELECT id, username, password, name, role FROM admins WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_classes(&self) -> Result<Vec<Class>, StoreError> {
        Ok(
            sqlx::query_as::<_, Class>("SELECT id, name, year FROM classes ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        Ok(
            sqlx::query_as::<_, Student>("SELECT id, name, class_id FROM students ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn students_by_class(&self, class_id: &str) -> Result<Vec<Student>, StoreError> {
        Ok(sqlx::query_as::<_, Student>(
            "SELECT id, name, class_id FROM students WHERE class_id = ? ORDER BY rowid",
        )
        .bind(class_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_absence(&self, record: AbsenceRecord) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO absences (id, student_id, class_id, teacher_id, date, session, timestamp) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.student_id)
        .bind(&record.class_id)
        .bind(&record.teacher_id)
        .bind(&record.date)
        .bind(&record.session)
        .bind(record.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_absences(&self) -> Result<Vec<AbsenceRecord>, StoreError> {
        Ok(sqlx::query_as::<_, AbsenceRecord>(
            "SELECT id, student_id, class_id, teacher_id, date, session, timestamp \
             FROM absences ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn absences_by_teacher(&self, teacher_id: &str) -> Result<Vec<AbsenceRecord>, StoreError> {
        self.absences_where("teacher_id", teacher_id).await
    }

    async fn absences_by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<AbsenceRecord>, StoreError> {
        Ok(sqlx::query_as::<_, AbsenceRecord>(
            "SELECT id, student_id, class_id, teacher_id, date, session, timestamp \
             FROM absences WHERE date >= ? AND date <= ? ORDER BY rowid",
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn absences_by_class(&self, class_id: &str) -> Result<Vec<AbsenceRecord>, StoreError> {
        self.absences_where("class_id", class_id).await
    }

    async fn absences_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<AbsenceRecord>, StoreError> {
        self.absences_where("student_id", student_id).await
    }

    async fn absence_exists(
        &self,
        student_id: &str,
        date: &str,
        session: &str,
    ) -> Result<bool, StoreError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM absences WHERE student_id = ? AND date = ? AND session = ?)",
        )
        .bind(student_id)
        .bind(date)
        .bind(session)
        .fetch_one(&self.pool)
        .await?)
    }
}
