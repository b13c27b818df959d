pub mod absence;
pub mod admin;
pub mod class;
pub mod role;
pub mod student;
pub mod teacher;
