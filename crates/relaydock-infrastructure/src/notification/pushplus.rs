use async_trait::async_trait;
use serde_json::json;

use relaydock_domain::notification::{
    ChannelKind, ChannelSender, NotificationMessage, NotifyError,
};

// Plain HTTP is a defect here; the token rides in the body.
pub const PUSHPLUS_ENDPOINT: &str = "https://www.pushplus.plus/send";

/// PushPlus push service sender.
pub struct PushPlusSender {
    token: String,
    client: reqwest::Client,
}

impl PushPlusSender {
    pub fn new(token: String) -> Self {
        Self {
            token,
            client: super::http_client(),
        }
    }

    fn build_payload(&self, message: &NotificationMessage) -> serde_json::Value {
        json!({
            "token": self.token,
            "title": message.title,
            "content": message.content,
            "template": "html",
        })
    }
}

#[async_trait]
impl ChannelSender for PushPlusSender {
    fn kind(&self) -> ChannelKind {
        ChannelKind::PushPlus
    }

    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let payload = self.build_payload(message);
        super::post_json(&self.client, self.kind(), PUSHPLUS_ENDPOINT, &payload).await
    }
}
