//! Reference dataset loaded into a fresh store: two teacher accounts
//! (teacher1/teacher2, password teacher123), two admin accounts
//! (admin/admin123, supervisor/super123), six classes and eighteen
//! students. Hashing the demo passwords happens once per process.

use once_cell::sync::Lazy;

use crate::auth::password::hash_password;
use crate::model::admin::{Admin, AdminRole};
use crate::model::class::Class;
use crate::model::student::Student;
use crate::model::teacher::Teacher;

pub struct SeedData {
    pub teachers: Vec<Teacher>,
    pub admins: Vec<Admin>,
    pub classes: Vec<Class>,
    pub students: Vec<Student>,
}

static SEED: Lazy<SeedData> = Lazy::new(build);

pub fn seed_data() -> &'static SeedData {
    &SEED
}

fn teacher(id: &str, username: &str, password: &str, name: &str) -> Teacher {
    Teacher {
        id: id.to_string(),
        username: username.to_string(),
        password: hash_password(password),
        name: name.to_string(),
    }
}

fn admin(id: &str, username: &str, password: &str, name: &str, role: AdminRole) -> Admin {
    Admin {
        id: id.to_string(),
        username: username.to_string(),
        password: hash_password(password),
        name: name.to_string(),
        role,
    }
}

fn class(id: &str, name: &str, year: &str) -> Class {
    Class {
        id: id.to_string(),
        name: name.to_string(),
        year: year.to_string(),
    }
}

fn student(id: &str, name: &str, class_id: &str) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        class_id: class_id.to_string(),
    }
}

fn build() -> SeedData {
    SeedData {
        teachers: vec![
            teacher("1", "teacher1", "teacher123", "John Smith"),
            teacher("2", "teacher2", "teacher123", "Sarah Johnson"),
        ],
        admins: vec![
            admin("1", "admin", "admin123", "Admin User", AdminRole::Principal),
            admin(
                "2",
                "supervisor",
                "super123",
                "Supervisor User",
                AdminRole::Supervisor,
            ),
        ],
        classes: vec![
            class("1", "Class 1", "1st Year"),
            class("2", "Class 2", "1st Year"),
            class("3", "Class 1", "2nd Year"),
            class("4", "Class 2", "2nd Year"),
            class("5", "Class 1", "3rd Year"),
            class("6", "Class 2", "3rd Year"),
        ],
        students: vec![
            student("1", "Alice Brown", "1"),
            student("2", "Bob Wilson", "1"),
            student("3", "Charlie Davis", "1"),
            student("4", "Diana Miller", "1"),
            student("5", "Ethan Moore", "1"),
            student("6", "Fiona Taylor", "2"),
            student("7", "George Anderson", "2"),
            student("8", "Hannah Thomas", "2"),
            student("9", "Ian Jackson", "3"),
            student("10", "Julia White", "3"),
            student("11", "Kevin Harris", "3"),
            student("12", "Laura Martin", "4"),
            student("13", "Mike Thompson", "4"),
            student("14", "Nina Garcia", "5"),
            student("15", "Oscar Martinez", "5"),
            student("16", "Paula Robinson", "6"),
            student("17", "Quinn Clark", "6"),
            student("18", "Rachel Rodriguez", "6"),
        ],
    }
}
