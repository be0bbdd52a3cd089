//! MediCare: a doctor-facing terminal dashboard over built-in mock records.

pub mod app;
pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod input;
pub mod logging;
pub mod modules;
pub mod ui;
