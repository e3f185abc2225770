// src/api/handlers/mod.rs
pub mod form;
pub mod generator;
