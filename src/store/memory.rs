use std::sync::RwLock;

use async_trait::async_trait;

use super::{Store, StoreError, TeacherPatch, seed};
use crate::model::absence::AbsenceRecord;
use crate::model::admin::Admin;
use crate::model::class::Class;
use crate::model::student::Student;
use crate::model::teacher::Teacher;

/// Process-lifetime store over lock-guarded vectors. Data lives as long as
/// the server; a restart returns to the seed dataset. Admins, classes and
/// students never change after seeding, so only teachers and absences sit
/// behind locks.
pub struct MemStore {
    teachers: RwLock<Vec<Teacher>>,
    admins: Vec<Admin>,
    classes: Vec<Class>,
    students: Vec<Student>,
    absences: RwLock<Vec<AbsenceRecord>>,
}

impl MemStore {
    pub fn with_seed_data() -> Self {
        let data = seed::seed_data();
        Self {
            teachers: RwLock::new(data.teachers.clone()),
            admins: data.admins.clone(),
            classes: data.classes.clone(),
            students: data.students.clone(),
            absences: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Store for MemStore {
    async fn teacher_by_id(&self, id: &str) -> Result<Option<Teacher>, StoreError> {
        let teachers = self.teachers.read().expect("teacher store poisoned");
        Ok(teachers.iter().find(|t| t.id == id).cloned())
    }

    async fn teacher_by_username(&self, username: &str) -> Result<Option<Teacher>, StoreError> {
        let teachers = self.teachers.read().expect("teacher store poisoned");
        Ok(teachers.iter().find(|t| t.username == username).cloned())
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        let teachers = self.teachers.read().expect("teacher store poisoned");
        Ok(teachers.clone())
    }

    async fn insert_teacher(&self, teacher: Teacher) -> Result<(), StoreError> {
        let mut teachers = self.teachers.write().expect("teacher store poisoned");
        if teachers.iter().any(|t| t.username == teacher.username) {
            return Err(StoreError::UsernameTaken);
        }
        teachers.push(teacher);
        Ok(())
    }

    async fn update_teacher(&self, id: &str, patch: TeacherPatch) -> Result<Teacher, StoreError> {
        let mut teachers = self.teachers.write().expect("teacher store poisoned");
        if let Some(username) = &patch.username {
            if teachers.iter().any(|t| t.username == *username && t.id != id) {
                return Err(StoreError::UsernameTaken);
            }
        }
        let teacher = teachers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        if let Some(username) = patch.username {
            teacher.username = username;
        }
        if let Some(password) = patch.password {
            teacher.password = password;
        }
        if let Some(name) = patch.name {
            teacher.name = name;
        }
        Ok(teacher.clone())
    }

    async fn delete_teacher(&self, id: &str) -> Result<(), StoreError> {
        let mut teachers = self.teachers.write().expect("teacher store poisoned");
        match teachers.iter().position(|t| t.id == id) {
            Some(index) => {
                teachers.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn admin_by_id(&self, id: &str) -> Result<Option<Admin>, StoreError> {
        Ok(self.admins.iter().find(|a| a.id == id).cloned())
    }

    async fn admin_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError> {
        Ok(self.admins.iter().find(|a| a.username == username).cloned())
    }

    async fn list_classes(&self) -> Result<Vec<Class>, StoreError> {
        Ok(self.classes.clone())
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.students.clone())
    }

    async fn students_by_class(&self, class_id: &str) -> Result<Vec<Student>, StoreError> {
        Ok(self
            .students
            .iter()
            .filter(|s| s.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn insert_absence(&self, record: AbsenceRecord) -> Result<(), StoreError> {
        let mut absences = self.absences.write().expect("absence store poisoned");
        absences.push(record);
        Ok(())
    }

    async fn list_absences(&self) -> Result<Vec<AbsenceRecord>, StoreError> {
        let absences = self.absences.read().expect("absence store poisoned");
        Ok(absences.clone())
    }

    async fn absences_by_teacher(&self, teacher_id: &str) -> Result<Vec<AbsenceRecord>, StoreError> {
        let absences = self.absences.read().expect("absence store poisoned");
        Ok(absences
            .iter()
            .filter(|r| r.teacher_id == teacher_id)
            .cloned()
            .collect())
    }

    async fn absences_by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<AbsenceRecord>, StoreError> {
        let absences = self.absences.read().expect("absence store poisoned");
        Ok(absences
            .iter()
            .filter(|r| r.date.as_str() >= start_date && r.date.as_str() <= end_date)
            .cloned()
            .collect())
    }

    async fn absences_by_class(&self, class_id: &str) -> Result<Vec<AbsenceRecord>, StoreError> {
        let absences = self.absences.read().expect("absence store poisoned");
        Ok(absences
            .iter()
            .filter(|r| r.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn absences_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<AbsenceRecord>, StoreError> {
        let absences = self.absences.read().expect("absence store poisoned");
        Ok(absences
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn absence_exists(
        &self,
        student_id: &str,
        date: &str,
        session: &str,
    ) -> Result<bool, StoreError> {
        let absences = self.absences.read().expect("absence store poisoned");
        Ok(absences
            .iter()
            .any(|r| r.student_id == student_id && r.date == date && r.session == session))
    }
}
