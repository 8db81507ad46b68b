use async_trait::async_trait;
use serde_json::json;

use relaydock_domain::notification::{
    ChannelKind, ChannelSender, NotificationMessage, NotifyError,
};

/// Feishu (Lark) custom bot webhook sender.
pub struct FeishuSender {
    webhook_url: String,
    client: reqwest::Client,
}

impl FeishuSender {
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            client: super::http_client(),
        }
    }

    /// Interactive card with a markdown body and a titled blue header.
    fn build_payload(&self, message: &NotificationMessage) -> serde_json::Value {
        json!({
            "msg_type": "interactive",
            "card": {
                "elements": [{
                    "tag": "markdown",
                    "content": message.content,
                    "text_align": "left",
                }],
                "header": {
                    "template": "blue",
                    "title": {
                        "content": message.title,
                        "tag": "plain_text",
                    },
                },
            },
        })
    }
}

#[async_trait]
impl ChannelSender for FeishuSender {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Feishu
    }

    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let payload = self.build_payload(message);
        super::post_json(&self.client, self.kind(), &self.webhook_url, &payload).await
    }
}
