//! User-registration backend for the `hms_db` schema.
//!
//! Request flow: router -> handler -> [`services::user_service::UserService`]
//! -> [`repositories::user_repository::UserRepository`] -> MySQL.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
