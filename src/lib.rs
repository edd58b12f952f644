// src/lib.rs
//! i-Clean website backend: wholesale inquiries, newsletter sign-ups and job
//! applications, with the application rendered to a PDF form and mailed to HR.

pub mod core;
pub mod emails;
pub mod forms;
pub mod pdf;
pub mod preview_cli;
pub mod types;
pub mod utils;
pub mod validation;
pub mod web;

pub use crate::core::{ConfigManager, Notifier};
pub use pdf::{render, ApplicationPdf, RenderError};
pub use types::ApplicationRecord;
pub use web::{build_rocket, start_web_server};
