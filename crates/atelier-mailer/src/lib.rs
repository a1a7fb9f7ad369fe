pub mod templates;

use anyhow::Result;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{debug, error};

/// SMTP relay settings, constructed once at startup and passed in explicitly.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub relay_host: String,
    pub relay_port: u16,
    pub sender_address: String,
    pub sender_password: String,
    pub admin_address: String,
}

impl MailerConfig {
    /// False when any credential is missing; sends will fail until all of
    /// sender address, sender password and admin address are configured.
    pub fn has_credentials(&self) -> bool {
        !self.sender_address.is_empty()
            && !self.sender_password.is_empty()
            && !self.admin_address.is_empty()
    }
}

/// Outbound notification seam. Both methods contain every failure: they log
/// and report false, never propagate. One send is one attempt; no retries.
pub trait Notifier: Send + Sync {
    fn notify_admin(&self, name: &str, email: &str, service: &str, message: &str) -> bool;
    fn notify_submitter(&self, name: &str, email: &str, service: &str) -> bool;
}

/// Production notifier talking STARTTLS to the configured relay.
pub struct SmtpNotifier {
    config: MailerConfig,
}

impl SmtpNotifier {
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }

    fn send(&self, to: &str, subject: &str, body: String) -> Result<()> {
        let mail = Message::builder()
            .from(self.config.sender_address.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        // One transport per send, dropped on every exit path.
        let transport = SmtpTransport::starttls_relay(&self.config.relay_host)?
            .port(self.config.relay_port)
            .credentials(Credentials::new(
                self.config.sender_address.clone(),
                self.config.sender_password.clone(),
            ))
            .build();

        transport.send(&mail)?;
        Ok(())
    }
}

impl Notifier for SmtpNotifier {
    fn notify_admin(&self, name: &str, email: &str, service: &str, message: &str) -> bool {
        let subject = templates::admin_subject(name);
        let body = templates::admin_body(name, email, service, message);

        match self.send(&self.config.admin_address, &subject, body) {
            Ok(()) => {
                debug!("Admin notification sent for {}", email);
                true
            }
            Err(err) => {
                error!("Admin notification failed for {}: {:#}", email, err);
                false
            }
        }
    }

    fn notify_submitter(&self, name: &str, email: &str, service: &str) -> bool {
        let body = templates::confirmation_body(name, service);

        match self.send(email, templates::CONFIRMATION_SUBJECT, body) {
            Ok(()) => {
                debug!("Confirmation sent to {}", email);
                true
            }
            Err(err) => {
                error!("Confirmation failed for {}: {:#}", email, err);
                false
            }
        }
    }
}
