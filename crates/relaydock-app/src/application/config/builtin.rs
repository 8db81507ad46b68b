use std::collections::HashMap;

use relaydock_domain::account::AccountConfig;
use relaydock_domain::provider::{BypassMethod, CheckInPath, ProviderConfig};

/// Redemption codes ride along on the account record under `cdk`.
fn cdk_from_account(account: &AccountConfig) -> Option<String> {
    account
        .get("cdk")
        .and_then(|v| v.as_str().map(str::to_string))
}

fn runawaytime_check_in_url(origin: &str, user_id: &str) -> String {
    format!("{origin}/api/user/clock_in?id={user_id}")
}

/// The built-in provider table, keyed by name. Entries can be overridden by
/// environment-declared customizations; see `AppConfig`.
pub fn builtin_providers() -> HashMap<String, ProviderConfig> {
    let providers = vec![
        ProviderConfig::new("anyrouter", "https://anyrouter.top")
            .with_bypass(BypassMethod::WafCookies)
            .with_check_in(CheckInPath::Fixed("/api/user/sign_in".into())),
        ProviderConfig::new("agentrouter", "https://agentrouter.org")
            .with_check_in(CheckInPath::Fixed("/api/user/sign_in".into())),
        ProviderConfig::new("wong", "https://wongai.top"),
        ProviderConfig::new("huan666", "https://huan666.de")
            .with_bypass(BypassMethod::CfClearance),
        ProviderConfig::new("runawaytime", "https://runawaytime.vip")
            .with_check_in(CheckInPath::Computed(runawaytime_check_in_url)),
        ProviderConfig::new("x666", "https://x666.me")
            .with_check_in(CheckInPath::Fixed("/api/user/check_in".into())),
        ProviderConfig::new("kfc", "https://kfcv50.link"),
        ProviderConfig::new("neb", "https://neb.ee")
            .with_check_in(CheckInPath::Fixed("/api/user/check_in".into())),
        ProviderConfig::new("elysiver", "https://elysiver.com")
            .with_bypass(BypassMethod::CfClearance),
        ProviderConfig::new("hotaru", "https://hotaruapi.com"),
        ProviderConfig::new("b4u", "https://b4u.qzz.io"),
        ProviderConfig::new("lightllm", "https://lightllm.online")
            .with_check_in(CheckInPath::Fixed("/api/user/sign_in".into())),
        ProviderConfig::new("takeapi", "https://takeapi.top"),
        ProviderConfig::new("thatapi", "https://thatapi.org")
            .with_api_user_key("voapi-user"),
        ProviderConfig::new("duckcoding", "https://duckcoding.com")
            .with_cdk_resolver(cdk_from_account),
        ProviderConfig::new("free-duckcoding", "https://free.duckcoding.com")
            .with_cdk_resolver(cdk_from_account),
        ProviderConfig::new("taizi", "https://taizi.me")
            .with_check_in(CheckInPath::Fixed("/api/user/sign_in".into())),
        ProviderConfig::new("openai-test", "https://api.openai-test.top"),
        ProviderConfig::new("icat", "https://icat.one"),
        ProviderConfig::new("chengtx", "https://chengtx.cc")
            .with_bypass(BypassMethod::WafCookies),
    ];

    providers
        .into_iter()
        .map(|provider| (provider.name.clone(), provider))
        .collect()
}
