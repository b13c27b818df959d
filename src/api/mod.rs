pub mod absences;
pub mod classes;
pub mod students;
pub mod teachers;
