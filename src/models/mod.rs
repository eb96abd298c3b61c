// src/models/mod.rs

pub mod hospital;
pub mod user;
