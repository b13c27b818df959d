use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One student marked absent for one class/date/session, attributed to
/// the recording teacher. Append-only; never updated or deleted.
///
/// `date` stays a plain ISO calendar-date string: range queries compare
/// it lexicographically, which is order-correct for zero-padded dates.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceRecord {
    pub id: String,
    pub student_id: String,
    pub class_id: String,
    pub teacher_id: String,
    pub date: String,
    pub session: String,
    pub timestamp: DateTime<Utc>,
}

impl AbsenceRecord {
    /// Builds a record with a generated id and creation timestamp.
    pub fn new(
        student_id: &str,
        class_id: &str,
        teacher_id: &str,
        date: &str,
        session: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            class_id: class_id.to_string(),
            teacher_id: teacher_id.to_string(),
            date: date.to_string(),
            session: session.to_string(),
            timestamp: Utc::now(),
        }
    }
}
