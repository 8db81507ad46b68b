use async_trait::async_trait;
use serde_json::{json, Value};

use relaydock_domain::notification::{
    ChannelKind, ChannelSender, NotificationMessage, NotifyError,
};

/// Telegram Bot API sender.
pub struct TelegramSender {
    bot_token: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramSender {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            bot_token,
            chat_id,
            client: super::http_client(),
        }
    }

    fn endpoint(&self) -> String {
        format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token)
    }

    // parse_mode is deliberately omitted: check-in content regularly carries
    // $ * _ [ ] characters that would break Markdown/HTML parsing on
    // Telegram's side.
    fn build_payload(&self, message: &NotificationMessage) -> serde_json::Value {
        json!({
            "chat_id": self.chat_id,
            "text": format!("{}\n\n{}", message.title, message.content),
        })
    }

    /// Telegram answers HTTP 200 with `ok: false` on logical rejection, so
    /// the body has to be inspected regardless of status.
    fn check_response(body: &Value) -> Result<(), NotifyError> {
        if body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            return Ok(());
        }
        let description = body
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");
        Err(NotifyError::TelegramApi(description.to_string()))
    }
}

#[async_trait]
impl ChannelSender for TelegramSender {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Telegram
    }

    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let payload = self.build_payload(message);
        let response = self
            .client
            .post(self.endpoint())
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(format!("Telegram request failed: {e}")))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| NotifyError::Transport(format!("Telegram response unreadable: {e}")))?;

        Self::check_response(&body)
    }
}
