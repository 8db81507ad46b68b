mod dingtalk;
mod email;
mod feishu;
mod pushplus;
mod serverchan;
mod telegram;
mod wecom;

pub use dingtalk::DingTalkSender;
pub use email::EmailSender;
pub use feishu::FeishuSender;
pub use pushplus::{PushPlusSender, PUSHPLUS_ENDPOINT};
pub use serverchan::ServerChanSender;
pub use telegram::TelegramSender;
pub use wecom::WeComSender;

use std::time::Duration;

use reqwest::Client;

use relaydock_domain::notification::{ChannelKind, NotifyError};

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn http_client() -> Client {
    Client::builder()
        .timeout(SEND_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// POST a JSON payload and treat any non-2xx status as a transport failure.
pub(crate) async fn post_json(
    client: &Client,
    kind: ChannelKind,
    url: &str,
    payload: &serde_json::Value,
) -> Result<(), NotifyError> {
    let response = client
        .post(url)
        .json(payload)
        .send()
        .await
        .map_err(|e| NotifyError::Transport(format!("{kind} request failed: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(NotifyError::Transport(format!(
            "{kind} returned {status}: {body}"
        )));
    }

    Ok(())
}
