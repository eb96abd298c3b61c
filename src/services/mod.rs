// src/services/mod.rs

pub mod user_service;
