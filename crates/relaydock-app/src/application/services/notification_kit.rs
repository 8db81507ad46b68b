use std::env;

use tracing::{error, info, warn};

use relaydock_domain::notification::{
    ChannelKind, ChannelSender, MessageKind, NotificationMessage, NotifyError,
};
use relaydock_infrastructure::notification::{
    DingTalkSender, EmailSender, FeishuSender, PushPlusSender, ServerChanSender, TelegramSender,
    WeComSender,
};

/// Channel credentials, read from the environment once at construction.
/// Empty strings count as unset.
#[derive(Debug, Clone, Default)]
pub struct ChannelSettings {
    pub email_user: Option<String>,
    pub email_pass: Option<String>,
    pub email_to: Option<String>,
    pub custom_smtp_server: Option<String>,
    pub pushplus_token: Option<String>,
    pub serverchan_key: Option<String>,
    pub dingtalk_webhook: Option<String>,
    pub feishu_webhook: Option<String>,
    pub wecom_webhook: Option<String>,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

fn env_opt(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.is_empty())
}

impl ChannelSettings {
    pub fn from_env() -> Self {
        Self {
            email_user: env_opt("EMAIL_USER"),
            email_pass: env_opt("EMAIL_PASS"),
            email_to: env_opt("EMAIL_TO"),
            custom_smtp_server: env_opt("CUSTOM_SMTP_SERVER"),
            pushplus_token: env_opt("PUSHPLUS_TOKEN"),
            serverchan_key: env_opt("SERVERPUSHKEY"),
            dingtalk_webhook: env_opt("DINGDING_WEBHOOK"),
            feishu_webhook: env_opt("FEISHU_WEBHOOK"),
            wecom_webhook: env_opt("WEIXIN_WEBHOOK"),
            telegram_bot_token: env_opt("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: env_opt("TELEGRAM_CHAT_ID"),
        }
    }
}

/// Outcome of one fan-out: how many channels ran and how many succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushSummary {
    pub sent: usize,
    pub attempted: usize,
}

/// Fans a single message out to every configured notification channel.
/// Channels with partial credentials are treated as unconfigured, not as
/// errors.
pub struct NotificationKit {
    settings: ChannelSettings,
}

impl NotificationKit {
    pub fn new(settings: ChannelSettings) -> Self {
        Self { settings }
    }

    pub fn from_env() -> Self {
        Self::new(ChannelSettings::from_env())
    }

    /// The sender for one channel, or None while any required credential is
    /// missing.
    fn sender_for(&self, kind: ChannelKind) -> Option<Box<dyn ChannelSender>> {
        let s = &self.settings;
        match kind {
            ChannelKind::Email => match (&s.email_user, &s.email_pass, &s.email_to) {
                (Some(user), Some(pass), Some(to)) => Some(Box::new(EmailSender::new(
                    user.clone(),
                    pass.clone(),
                    to.clone(),
                    s.custom_smtp_server.clone(),
                ))),
                _ => None,
            },
            ChannelKind::PushPlus => s
                .pushplus_token
                .as_ref()
                .map(|token| Box::new(PushPlusSender::new(token.clone())) as Box<dyn ChannelSender>),
            ChannelKind::ServerChan => s
                .serverchan_key
                .as_ref()
                .map(|key| Box::new(ServerChanSender::new(key.clone())) as Box<dyn ChannelSender>),
            ChannelKind::DingTalk => s
                .dingtalk_webhook
                .as_ref()
                .map(|url| Box::new(DingTalkSender::new(url.clone())) as Box<dyn ChannelSender>),
            ChannelKind::Feishu => s
                .feishu_webhook
                .as_ref()
                .map(|url| Box::new(FeishuSender::new(url.clone())) as Box<dyn ChannelSender>),
            ChannelKind::WeCom => s
                .wecom_webhook
                .as_ref()
                .map(|url| Box::new(WeComSender::new(url.clone())) as Box<dyn ChannelSender>),
            ChannelKind::Telegram => match (&s.telegram_bot_token, &s.telegram_chat_id) {
                (Some(token), Some(chat_id)) => Some(Box::new(TelegramSender::new(
                    token.clone(),
                    chat_id.clone(),
                ))),
                _ => None,
            },
        }
    }

    /// All fully-configured senders, in fixed dispatch order.
    pub fn configured_senders(&self) -> Vec<Box<dyn ChannelSender>> {
        ChannelKind::ORDERED
            .iter()
            .filter_map(|kind| self.sender_for(*kind))
            .collect()
    }

    /// Best-effort fan-out. Never fails; per-channel errors are logged and
    /// counted in the summary.
    pub async fn push_message(
        &self,
        title: &str,
        content: &str,
        kind: MessageKind,
    ) -> PushSummary {
        let message = NotificationMessage::new(title, content).with_kind(kind);
        dispatch(&self.configured_senders(), &message).await
    }

    async fn send_via(
        &self,
        kind: ChannelKind,
        message: &NotificationMessage,
    ) -> Result<(), NotifyError> {
        let sender = self
            .sender_for(kind)
            .ok_or_else(|| NotifyError::not_configured(kind))?;
        sender.send(message).await
    }

    // Direct per-channel sends for callers that bypass the fan-out's
    // pre-filter. Each fails with its channel's own configuration error.

    pub async fn send_email(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        self.send_via(ChannelKind::Email, message).await
    }

    pub async fn send_pushplus(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        self.send_via(ChannelKind::PushPlus, message).await
    }

    pub async fn send_server_chan(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        self.send_via(ChannelKind::ServerChan, message).await
    }

    pub async fn send_dingtalk(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        self.send_via(ChannelKind::DingTalk, message).await
    }

    pub async fn send_feishu(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        self.send_via(ChannelKind::Feishu, message).await
    }

    pub async fn send_wecom(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        self.send_via(ChannelKind::WeCom, message).await
    }

    pub async fn send_telegram(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        self.send_via(ChannelKind::Telegram, message).await
    }
}

/// Run each sender in order, isolating failures. Separated from the kit so
/// the aggregation logic is testable with sender doubles.
async fn dispatch(senders: &[Box<dyn ChannelSender>], message: &NotificationMessage) -> PushSummary {
    if senders.is_empty() {
        warn!("No notification channels configured, skipping push");
        return PushSummary {
            sent: 0,
            attempted: 0,
        };
    }

    let mut sent = 0;
    for sender in senders {
        match sender.send(message).await {
            Ok(()) => {
                info!("{} notification sent", sender.kind());
                sent += 1;
            }
            Err(e) => {
                error!("{} notification failed: {e}", sender.kind());
            }
        }
    }

    let summary = PushSummary {
        sent,
        attempted: senders.len(),
    };
    info!(
        "Notification push complete: {}/{} channels succeeded",
        summary.sent, summary.attempted
    );
    summary
}
