use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use atelier_mailer::MailerConfig;

/// Runtime configuration, assembled once at startup and passed down
/// explicitly. Every option has a default; missing SMTP credentials only
/// disable outbound mail, they never block serving.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub admin_secret: String,
    pub mail: MailerConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let host = env::var("ATELIER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env::var("ATELIER_PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .context("ATELIER_PORT must be a valid port number")?;

        let db_path = PathBuf::from(
            env::var("ATELIER_DB_PATH").unwrap_or_else(|_| "atelier.db".into()),
        );
        let admin_secret =
            env::var("ATELIER_ADMIN_SECRET").unwrap_or_else(|_| "dev-admin-change-me".into());

        let relay_port: u16 = env::var("ATELIER_SMTP_PORT")
            .unwrap_or_else(|_| "587".into())
            .parse()
            .context("ATELIER_SMTP_PORT must be a valid port number")?;

        let mail = MailerConfig {
            relay_host: env::var("ATELIER_SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".into()),
            relay_port,
            sender_address: env::var("ATELIER_SMTP_USER").unwrap_or_default(),
            sender_password: env::var("ATELIER_SMTP_PASSWORD").unwrap_or_default(),
            admin_address: env::var("ATELIER_ADMIN_EMAIL").unwrap_or_default(),
        };

        Ok(Self {
            host,
            port,
            db_path,
            admin_secret,
            mail,
        })
    }
}
