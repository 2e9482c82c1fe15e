//! Email dispatch for contact-form submissions.
//!
//! Uses `lettre` for SMTP transport. Messages go out over STARTTLS
//! submission with a single delivery attempt.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Attachment, Mailbox, MultiPart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;
use tracing::{error, info};

use crate::config::EmailConfig;

/// Reason value that routes a message to the error recipient.
pub const ERROR_REASON: &str = "error";

/// Email service errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    BuildError(String),
    /// Failed to send email.
    #[error("Failed to send email: {0}")]
    SendError(String),
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// A contact-form submission, already validated.
#[derive(Debug, Clone)]
pub struct ContactEmail<'a> {
    /// Visitor name.
    pub name: &'a str,
    /// Visitor email address.
    pub email: &'a str,
    /// Selected contact reason.
    pub reason: &'a str,
    /// Free-text message.
    pub message: &'a str,
}

/// A file to attach, with its sniffed MIME type.
#[derive(Debug, Clone)]
pub struct EmailAttachment<'a> {
    /// Original filename.
    pub filename: &'a str,
    /// Sniffed MIME type.
    pub mime_type: &'a str,
    /// Raw file content.
    pub content: &'a [u8],
}

/// Email service for contact notifications.
#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    /// Creates a new email service.
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Returns the configured recipient for a contact reason.
    #[must_use]
    pub fn recipient_for(&self, reason: &str) -> &str {
        if reason == ERROR_REASON {
            &self.config.error_recipient
        } else {
            &self.config.contact_recipient
        }
    }

    /// Creates a STARTTLS SMTP transport.
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        Ok(
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
                .map_err(|e| EmailError::SendError(e.to_string()))?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build(),
        )
    }

    /// Builds the notification message for a contact submission.
    ///
    /// # Errors
    ///
    /// Returns an error if an address is invalid or the message cannot be
    /// assembled.
    pub fn build_contact_message(
        &self,
        contact: &ContactEmail<'_>,
        attachment: Option<&EmailAttachment<'_>>,
    ) -> Result<Message, EmailError> {
        let from = Mailbox::new(
            Some(self.config.from_name.clone()),
            parse_address(&self.config.from_email)?,
        );
        let reply_to = Mailbox::new(Some(contact.name.to_string()), parse_address(contact.email)?);
        let to = Mailbox::new(None, parse_address(self.recipient_for(contact.reason))?);

        let body = MultiPart::alternative_plain_html(
            render_contact_text(contact),
            render_contact_html(contact),
        );

        let builder = Message::builder()
            .from(from)
            .reply_to(reply_to)
            .to(to)
            .subject(format!("Nuevo mensaje de {}", contact.name));

        let message = match attachment {
            Some(file) => {
                let content_type = ContentType::parse(file.mime_type)
                    .map_err(|e| EmailError::BuildError(e.to_string()))?;
                let part = Attachment::new(file.filename.to_string())
                    .body(file.content.to_vec(), content_type);
                builder.multipart(MultiPart::mixed().multipart(body).singlepart(part))
            }
            None => builder.multipart(body),
        };

        message.map_err(|e| EmailError::BuildError(e.to_string()))
    }

    /// Sends the notification for a contact submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the email cannot be built or delivered. Delivery
    /// is attempted once.
    pub async fn send_contact(
        &self,
        contact: &ContactEmail<'_>,
        attachment: Option<&EmailAttachment<'_>>,
    ) -> Result<(), EmailError> {
        let message = self.build_contact_message(contact, attachment)?;
        let transport = self.create_transport()?;

        if let Err(e) = transport.send(message).await {
            error!(
                error = %e,
                smtp_host = %self.config.smtp_host,
                "Failed to send contact email"
            );
            return Err(EmailError::SendError(e.to_string()));
        }

        info!(
            recipient = %self.recipient_for(contact.reason),
            reason = %contact.reason,
            has_attachment = attachment.is_some(),
            "Contact email sent"
        );
        Ok(())
    }
}

fn parse_address(raw: &str) -> Result<lettre::Address, EmailError> {
    raw.parse()
        .map_err(|e| EmailError::InvalidAddress(format!("{raw}: {e}")))
}

/// Renders the plain-text body.
fn render_contact_text(contact: &ContactEmail<'_>) -> String {
    format!(
        "Este es un correo electrónico enviado desde el sitio web por el formulario de contacto.\n\n\
         Nombre: {}\n\n\
         Correo Electrónico: {}\n\n\
         Motivo: {}\n\n\
         Mensaje:\n{}",
        contact.name, contact.email, contact.reason, contact.message
    )
}

/// Renders the HTML alternative body. All visitor input is escaped.
fn render_contact_html(contact: &ContactEmail<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 0; }}
        .email-container {{ max-width: 600px; margin: auto; border: 1px solid #ddd; border-radius: 8px; overflow: hidden; }}
        .header {{ background-color: #f4f4f4; padding: 20px; text-align: center; }}
        .content {{ padding: 20px; }}
        .footer {{ background-color: #f4f4f4; text-align: center; padding: 10px; font-size: 0.8em; color: #666; }}
        .highlight {{ color: #0056b3; }}
    </style>
</head>
<body>
    <div class="email-container">
        <div class="header"><h1>Paraíso Del Jamón</h1></div>
        <div class="content">
            <h2>Nuevo mensaje</h2>
            <p><strong>Nombre:</strong> <span class="highlight">{name}</span></p>
            <p><strong>Correo Electrónico:</strong> <span class="highlight">{email}</span></p>
            <p><strong>Motivo:</strong> <span class="highlight">{reason}</span></p>
            <p><strong>Mensaje:</strong></p>
            <p>{message}</p>
        </div>
        <div class="footer">
            <p>Este correo fue enviado automáticamente desde el formulario de contacto del sitio web Paraíso Del Jamón.</p>
        </div>
    </div>
</body>
</html>
"#,
        name = escape_html(contact.name),
        email = escape_html(contact.email),
        reason = escape_html(contact.reason),
        message = escape_html(contact.message).replace('\n', "<br>"),
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "email_tests.rs"]
mod tests;
