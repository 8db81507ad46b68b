use async_trait::async_trait;
use std::fmt;

use super::message::NotificationMessage;

/// One concrete delivery mechanism for outbound alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Email,
    PushPlus,
    ServerChan,
    DingTalk,
    Feishu,
    WeCom,
    Telegram,
}

impl ChannelKind {
    /// Dispatch order observed by `push_message`; logs and tests rely on it.
    pub const ORDERED: [ChannelKind; 7] = [
        ChannelKind::Email,
        ChannelKind::PushPlus,
        ChannelKind::ServerChan,
        ChannelKind::DingTalk,
        ChannelKind::Feishu,
        ChannelKind::WeCom,
        ChannelKind::Telegram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Email => "Email",
            ChannelKind::PushPlus => "PushPlus",
            ChannelKind::ServerChan => "Server Push",
            ChannelKind::DingTalk => "DingTalk",
            ChannelKind::Feishu => "Feishu",
            ChannelKind::WeCom => "WeChat Work",
            ChannelKind::Telegram => "Telegram",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Notification failures. Each channel gets its own distinctly worded
/// configuration variant so direct sends that bypass the dispatcher's
/// pre-filter fail with a recognizable condition.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Email configuration not set")]
    EmailNotConfigured,

    #[error("PushPlus token not configured")]
    PushPlusNotConfigured,

    #[error("Server Push key not configured")]
    ServerChanNotConfigured,

    #[error("DingTalk webhook not configured")]
    DingTalkNotConfigured,

    #[error("Feishu webhook not configured")]
    FeishuNotConfigured,

    #[error("WeChat Work webhook not configured")]
    WeComNotConfigured,

    #[error("Telegram bot token or chat id not configured")]
    TelegramNotConfigured,

    /// HTTP succeeded but the Telegram API body reported logical failure.
    #[error("Telegram API error: {0}")]
    TelegramApi(String),

    #[error("invalid mail address: {0}")]
    Address(String),

    #[error("SMTP error: {0}")]
    Smtp(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl NotifyError {
    /// The configuration-missing error for a channel.
    pub fn not_configured(kind: ChannelKind) -> Self {
        match kind {
            ChannelKind::Email => NotifyError::EmailNotConfigured,
            ChannelKind::PushPlus => NotifyError::PushPlusNotConfigured,
            ChannelKind::ServerChan => NotifyError::ServerChanNotConfigured,
            ChannelKind::DingTalk => NotifyError::DingTalkNotConfigured,
            ChannelKind::Feishu => NotifyError::FeishuNotConfigured,
            ChannelKind::WeCom => NotifyError::WeComNotConfigured,
            ChannelKind::Telegram => NotifyError::TelegramNotConfigured,
        }
    }
}

/// Strategy trait implemented by every notification channel.
#[async_trait]
pub trait ChannelSender: Send + Sync {
    fn kind(&self) -> ChannelKind;

    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ordered_covers_every_channel_once() {
        let unique: HashSet<&str> = ChannelKind::ORDERED.iter().map(|k| k.as_str()).collect();
        assert_eq!(unique.len(), ChannelKind::ORDERED.len());
    }

    #[test]
    fn configuration_errors_are_distinctly_worded() {
        let messages: HashSet<String> = ChannelKind::ORDERED
            .iter()
            .map(|kind| NotifyError::not_configured(*kind).to_string())
            .collect();
        assert_eq!(messages.len(), ChannelKind::ORDERED.len());
    }
}
