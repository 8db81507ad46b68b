use anyhow::Result;
use tracing::{info, warn};

use relaydock_app::{AppConfig, NotificationKit};
use relaydock_infrastructure::logging::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let config = AppConfig::load_from_env();
    info!(
        "Loaded {} provider(s), {} account(s), {} LinuxDo account(s)",
        config.providers.len(),
        config.accounts.len(),
        config.linux_do_accounts.len()
    );
    if let Some(proxy) = &config.global_proxy {
        info!("Global proxy: {}", proxy.server);
    }

    for (index, account) in config.accounts.iter().enumerate() {
        if config.provider_for(&account.provider).is_err() {
            warn!(
                "Account '{}' references unknown provider '{}'",
                account.display_name(index),
                account.provider
            );
        }
    }

    let kit = NotificationKit::from_env();
    let channels = kit.configured_senders();
    if channels.is_empty() {
        warn!("No notification channels configured");
    } else {
        let names: Vec<String> = channels.iter().map(|s| s.kind().to_string()).collect();
        info!("Notification channels: {}", names.join(", "));
    }

    Ok(())
}
