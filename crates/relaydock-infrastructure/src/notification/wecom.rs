use async_trait::async_trait;
use serde_json::json;

use relaydock_domain::notification::{
    ChannelKind, ChannelSender, NotificationMessage, NotifyError,
};

/// WeChat Work (WeCom) group robot webhook sender.
/// Same wire shape as DingTalk, different endpoint family.
pub struct WeComSender {
    webhook_url: String,
    client: reqwest::Client,
}

impl WeComSender {
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            client: super::http_client(),
        }
    }

    fn build_payload(&self, message: &NotificationMessage) -> serde_json::Value {
        json!({
            "msgtype": "text",
            "text": {
                "content": format!("{}\n{}", message.title, message.content),
            },
        })
    }
}

#[async_trait]
impl ChannelSender for WeComSender {
    fn kind(&self) -> ChannelKind {
        ChannelKind::WeCom
    }

    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let payload = self.build_payload(message);
        super::post_json(&self.client, self.kind(), &self.webhook_url, &payload).await
    }
}
