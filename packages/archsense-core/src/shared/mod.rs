//! Shared models and helpers

pub mod models;
