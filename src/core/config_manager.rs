// src/core/config_manager.rs
//! Environment-driven configuration for the server, SMTP and notifications.

use anyhow::{Context, Result};
use std::net::IpAddr;
use tracing::{info, warn};

use super::mailer::MailerConfig;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub server: ServerConfig,
    pub mail: MailerConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Receives inquiry and application alerts.
    pub admin_email: String,
    /// Linked from customer-facing emails.
    pub site_url: String,
}

impl ConfigManager {
    /// Load all configuration from the process environment (and `.env`).
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server = ServerConfig {
            address: var("ROCKET_ADDRESS")
                .unwrap_or_else(|| "0.0.0.0".to_string())
                .parse()
                .context("ROCKET_ADDRESS must be a valid IP address")?,
            port: parse_or(var("ROCKET_PORT"), 8000).context("ROCKET_PORT must be a valid port number")?,
        };

        let defaults = MailerConfig::default();
        let mail = MailerConfig {
            host: var("SMTP_HOST").unwrap_or(defaults.host),
            port: parse_or(var("SMTP_PORT"), defaults.port)
                .context("SMTP_PORT must be a valid port number")?,
            username: var("EMAIL_USER"),
            password: var("EMAIL_PASS"),
            from: var("MAIL_FROM").unwrap_or(defaults.from),
            tls: var("SMTP_TLS").unwrap_or(defaults.tls),
            timeout: parse_or(var("SMTP_TIMEOUT"), defaults.timeout)
                .context("SMTP_TIMEOUT must be a number of seconds")?,
        };

        if mail.username.is_none() && mail.password.is_none() {
            warn!("EMAIL_USER/EMAIL_PASS not set, SMTP will be used without authentication");
        }

        let admin_email = var("ADMIN_EMAIL").context("ADMIN_EMAIL environment variable not set")?;
        if !crate::validation::is_valid_email(&admin_email) {
            anyhow::bail!("ADMIN_EMAIL is not a valid email address: {}", admin_email);
        }

        let notifications = NotificationConfig {
            admin_email: admin_email.trim().to_string(),
            site_url: var("SITE_URL").unwrap_or_else(|| "https://i-clean.vercel.app/".to_string()),
        };

        info!(
            "Configuration loaded: server {}:{}, smtp {}:{} ({})",
            server.address, server.port, mail.host, mail.port, mail.tls
        );

        Ok(Self {
            server,
            mail,
            notifications,
        })
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => Ok(raw.trim().parse()?),
        None => Ok(default),
    }
}
