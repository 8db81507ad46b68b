use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use relaydock_domain::notification::{
    ChannelKind, ChannelSender, MessageKind, NotificationMessage, NotifyError,
};

/// SMTP email sender using an implicit-TLS session on port 465.
pub struct EmailSender {
    user: String,
    pass: String,
    to: String,
    smtp_server: Option<String>,
}

impl EmailSender {
    pub fn new(user: String, pass: String, to: String, smtp_server: Option<String>) -> Self {
        Self {
            user,
            pass,
            to,
            smtp_server,
        }
    }

    /// Explicit override wins; otherwise `smtp.<domain>` derived from the
    /// login address.
    fn smtp_host(&self) -> String {
        match self.smtp_server.as_deref() {
            Some(server) if !server.is_empty() => server.to_string(),
            _ => {
                let domain = self.user.split('@').nth(1).unwrap_or_default();
                format!("smtp.{domain}")
            }
        }
    }

    fn content_type(kind: MessageKind) -> ContentType {
        match kind {
            MessageKind::Text => ContentType::TEXT_PLAIN,
            MessageKind::Html => ContentType::TEXT_HTML,
        }
    }

    fn build_message(&self, message: &NotificationMessage) -> Result<Message, NotifyError> {
        let from = format!("RelayDock Assistant <{}>", self.user)
            .parse()
            .map_err(|e| NotifyError::Address(format!("from: {e}")))?;
        let to = self
            .to
            .parse()
            .map_err(|e| NotifyError::Address(format!("to: {e}")))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(&message.title)
            .header(Self::content_type(message.kind))
            .body(message.content.clone())
            .map_err(|e| NotifyError::Smtp(e.to_string()))
    }
}

#[async_trait]
impl ChannelSender for EmailSender {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Email
    }

    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let email = self.build_message(message)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.smtp_host())
            .map_err(|e| NotifyError::Smtp(e.to_string()))?
            .credentials(Credentials::new(self.user.clone(), self.pass.clone()))
            .build();

        transport
            .send(email)
            .await
            .map_err(|e| NotifyError::Smtp(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender(smtp_server: Option<&str>) -> EmailSender {
        EmailSender::new(
            "user@example.com".into(),
            "secret".into(),
            "dest@example.org".into(),
            smtp_server.map(str::to_string),
        )
    }

    #[test]
    fn smtp_host_derived_from_user_domain() {
        assert_eq!(sender(None).smtp_host(), "smtp.example.com");
    }

    #[test]
    fn smtp_host_override_wins() {
        assert_eq!(
            sender(Some("mail.corp.example")).smtp_host(),
            "mail.corp.example"
        );
    }

    #[test]
    fn empty_override_falls_back_to_derivation() {
        assert_eq!(sender(Some("")).smtp_host(), "smtp.example.com");
    }

    #[test]
    fn builds_text_and_html_messages() {
        let s = sender(None);
        assert!(s
            .build_message(&NotificationMessage::new("Subject", "Body"))
            .is_ok());
        assert!(s
            .build_message(
                &NotificationMessage::new("Subject", "<b>Body</b>").with_kind(MessageKind::Html)
            )
            .is_ok());
    }

    #[test]
    fn bad_recipient_is_an_address_error() {
        let s = EmailSender::new(
            "user@example.com".into(),
            "secret".into(),
            "not-an-address".into(),
            None,
        );
        let err = s
            .build_message(&NotificationMessage::new("Subject", "Body"))
            .unwrap_err();
        assert!(matches!(err, NotifyError::Address(_)));
    }
}
