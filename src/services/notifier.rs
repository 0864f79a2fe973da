//! Best-effort email notifications for contact submissions.
//!
//! Persistence is the authoritative success signal for the contact endpoint;
//! the notification runs afterwards and its failure never changes the
//! response already promised to the caller. The primary SMTP relay is tried
//! first, then the fallback relay once.

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use tracing::{debug, info, warn};

use crate::config::SmtpSettings;
use crate::entity::contact;
use crate::error::{AppError, AppResult};

struct Transports {
    primary: AsyncSmtpTransport<Tokio1Executor>,
    fallback: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

/// Contact notification sender. Disabled when SMTP is unconfigured.
pub struct Notifier {
    transports: Option<Transports>,
}

impl Notifier {
    /// Build from configuration; `None` settings produce a disabled notifier.
    pub fn from_config(settings: Option<&SmtpSettings>) -> AppResult<Self> {
        let Some(settings) = settings else {
            return Ok(Self { transports: None });
        };

        let credentials = Credentials::new(
            settings.username.clone(),
            settings.password.expose_secret().to_string(),
        );

        let primary = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| AppError::Configuration(format!("Invalid SMTP_HOST: {}", e)))?
            .credentials(credentials.clone())
            .port(settings.port)
            .build();

        let fallback = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.fallback_host)
            .map_err(|e| AppError::Configuration(format!("Invalid SMTP_FALLBACK_HOST: {}", e)))?
            .credentials(credentials)
            .build();

        let from = settings
            .from_address
            .parse::<Mailbox>()
            .map_err(|e| AppError::Configuration(format!("Invalid YARITU_NOTIFY_FROM: {}", e)))?;
        let to = settings
            .notify_address
            .parse::<Mailbox>()
            .map_err(|e| AppError::Configuration(format!("Invalid YARITU_NOTIFY_TO: {}", e)))?;

        info!("Contact notifier initialized: relay={}", settings.host);

        Ok(Self {
            transports: Some(Transports {
                primary,
                fallback,
                from,
                to,
            }),
        })
    }

    /// A notifier that silently skips every send.
    pub fn disabled() -> Self {
        Self { transports: None }
    }

    /// Send a notification for a stored contact submission.
    ///
    /// Tries the primary relay, then the fallback relay once. Callers treat
    /// the returned error as best-effort only.
    pub async fn contact_alert(&self, submission: &contact::Model) -> AppResult<()> {
        let Some(transports) = &self.transports else {
            debug!("SMTP not configured, skipping contact notification");
            return Ok(());
        };

        let email = build_contact_email(transports, submission)?;

        match transports.primary.send(email.clone()).await {
            Ok(_) => Ok(()),
            Err(primary_err) => {
                warn!(
                    "Primary SMTP relay failed, trying fallback: {}",
                    primary_err
                );
                transports.fallback.send(email).await.map(|_| ()).map_err(|e| {
                    AppError::Upstream(format!("Both SMTP relays failed: {}", e))
                })
            }
        }
    }
}

fn build_contact_email(
    transports: &Transports,
    submission: &contact::Model,
) -> AppResult<Message> {
    let body = format!(
        "New contact submission\n\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Subject: {}\n\n\
         {}\n",
        submission.full_name,
        submission.email,
        submission.phone.as_deref().unwrap_or("-"),
        submission.subject.as_deref().unwrap_or("-"),
        submission.message,
    );

    Message::builder()
        .from(transports.from.clone())
        .to(transports.to.clone())
        .subject(format!("Yaritu contact: {}", submission.full_name))
        .header(ContentType::TEXT_PLAIN)
        .body(body)
        .map_err(|e| AppError::Configuration(format!("Failed to build notification: {}", e)))
}
