// src/core/mod.rs
//! Shared services: configuration, outgoing mail and notification delivery.

pub mod config_manager;
pub mod mailer;
pub mod notifier;

pub use config_manager::ConfigManager;
pub use mailer::{Attachment, Email, MailError, Mailer, MailerConfig, SmtpMailer};
pub use notifier::{Delivery, Notifier};
