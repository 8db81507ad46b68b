mod builtin;
mod proxy;

pub use builtin::builtin_providers;
pub use proxy::ProxyConfig;

use std::collections::HashMap;
use std::env;

use serde_json::Value;
use tracing::warn;

use relaydock_domain::account::{AccountConfig, OAuthAccountConfig};
use relaydock_domain::provider::ProviderConfig;
use relaydock_domain::shared::DomainError;

pub const ENV_ACCOUNTS: &str = "ACCOUNTS";
pub const ENV_ACCOUNTS_LINUX_DO: &str = "ACCOUNTS_LINUX_DO";
pub const ENV_CUSTOM_PROVIDERS: &str = "CUSTOM_PROVIDERS";
pub const ENV_PROXY: &str = "PROXY";

/// Process-wide configuration snapshot: built once at startup, then passed
/// around by reference. Loading never fails; each malformed input degrades
/// independently to its empty/None default so one broken block cannot take
/// down the others.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub providers: HashMap<String, ProviderConfig>,
    pub accounts: Vec<AccountConfig>,
    pub linux_do_accounts: Vec<OAuthAccountConfig>,
    pub global_proxy: Option<ProxyConfig>,
}

impl AppConfig {
    pub fn load_from_env() -> Self {
        Self::from_parts(
            env::var(ENV_ACCOUNTS).ok().as_deref(),
            env::var(ENV_ACCOUNTS_LINUX_DO).ok().as_deref(),
            env::var(ENV_CUSTOM_PROVIDERS).ok().as_deref(),
            env::var(ENV_PROXY).ok().as_deref(),
        )
    }

    /// Environment-free constructor over the raw variable values.
    pub fn from_parts(
        accounts: Option<&str>,
        linux_do_accounts: Option<&str>,
        custom_providers: Option<&str>,
        proxy: Option<&str>,
    ) -> Self {
        let mut providers = builtin_providers();
        for (name, data) in parse_custom_providers(custom_providers) {
            providers.insert(name.clone(), ProviderConfig::from_json(&name, &data, true));
        }

        Self {
            providers,
            accounts: parse_json_array(ENV_ACCOUNTS, accounts)
                .iter()
                .map(AccountConfig::from_json)
                .collect(),
            linux_do_accounts: parse_json_array(ENV_ACCOUNTS_LINUX_DO, linux_do_accounts)
                .iter()
                .map(OAuthAccountConfig::from_json)
                .collect(),
            global_proxy: proxy.and_then(ProxyConfig::parse),
        }
    }

    pub fn provider_for(&self, name: &str) -> Result<&ProviderConfig, DomainError> {
        self.providers
            .get(name)
            .ok_or_else(|| DomainError::ProviderNotFound(name.to_string()))
    }
}

/// Parse an env value as a JSON array; anything else degrades to empty.
fn parse_json_array(var: &str, raw: Option<&str>) -> Vec<Value> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!("{var} is valid JSON but not an array, ignoring");
            Vec::new()
        }
        Err(e) => {
            warn!("{var} is not valid JSON ({e}), ignoring");
            Vec::new()
        }
    }
}

/// Parse the provider-override env value as a name → object map; anything
/// else degrades to no overlay.
fn parse_custom_providers(raw: Option<&str>) -> Vec<(String, Value)> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(entries)) => entries
            .into_iter()
            .filter(|(name, data)| {
                if data.is_object() {
                    true
                } else {
                    warn!("{ENV_CUSTOM_PROVIDERS} entry '{name}' is not an object, ignoring");
                    false
                }
            })
            .collect(),
        Ok(_) => {
            warn!("{ENV_CUSTOM_PROVIDERS} is valid JSON but not an object, ignoring");
            Vec::new()
        }
        Err(e) => {
            warn!("{ENV_CUSTOM_PROVIDERS} is not valid JSON ({e}), ignoring");
            Vec::new()
        }
    }
}
