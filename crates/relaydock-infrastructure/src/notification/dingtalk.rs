use async_trait::async_trait;
use serde_json::json;

use relaydock_domain::notification::{
    ChannelKind, ChannelSender, NotificationMessage, NotifyError,
};

/// DingTalk group robot webhook sender.
pub struct DingTalkSender {
    webhook_url: String,
    client: reqwest::Client,
}

impl DingTalkSender {
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
impl ChannelSender for DingTalkSender {
    fn kind(&self) -> ChannelKind {
        ChannelKind::DingTalk
    }

    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let payload = self.build_payload(message);
        super::post_json(&self.client, self.kind(), &self.webhook_url, &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_joins_title_and_content() {
        let sender = DingTalkSender::new("https://oapi.dingtalk.com/robot/send?token=x".into());
        let payload = sender.build_payload(&NotificationMessage::new("Title", "Content"));
        assert_eq!(payload["msgtype"], "text");
        assert_eq!(payload["text"]["content"], "Title\nContent");
    }
}
