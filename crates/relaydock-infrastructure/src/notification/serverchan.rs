use async_trait::async_trait;
use serde_json::json;

use relaydock_domain::notification::{
    ChannelKind, ChannelSender, NotificationMessage, NotifyError,
};

/// Server 酱 (ServerChan) turbo push sender.
pub struct ServerChanSender {
    key: String,
    client: reqwest::Client,
}

impl ServerChanSender {
    pub fn new(key: String) -> Self {
        Self {
            key,
            client: super::http_client(),
        }
    }

    fn endpoint(&self) -> String {
        format!("https://sctapi.ftqq.com/{}.send", self.key)
    }

    fn build_payload(&self, message: &NotificationMessage) -> serde_json::Value {
        json!({
            "title": message.title,
            "desp": message.content,
        })
    }
}

#[async_trait]
impl ChannelSender for ServerChanSender {
    fn kind(&self) -> ChannelKind {
        ChannelKind::ServerChan
    }

    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let payload = self.build_payload(message);
        super::post_json(&self.client, self.kind(), &self.endpoint(), &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_embeds_key() {
        let sender = ServerChanSender::new("SCT123".into());
        assert_eq!(sender.endpoint(), "https://sctapi.ftqq.com/SCT123.send");
    }

    #[test]
    fn payload_uses_desp_field() {
        let sender = ServerChanSender::new("SCT123".into());
        let payload = sender.build_payload(&NotificationMessage::new("Title", "Content"));
        assert_eq!(payload["title"], "Title");
        assert_eq!(payload["desp"], "Content");
    }
}
