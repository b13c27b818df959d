//! Role-based absence tracking for a small school. Teachers record which
//! students missed which lesson sessions; admins monitor the records and
//! manage teacher accounts. Everything speaks JSON over REST endpoints.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod docs;
pub mod model;
pub mod models;
pub mod routes;
pub mod store;
