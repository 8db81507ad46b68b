use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::account::AccountConfig;
use crate::shared::DomainError;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_AUTH_STATE_PATH: &str = "/api/oauth/state";
pub const DEFAULT_STATUS_PATH: &str = "/api/status";
pub const DEFAULT_TOPUP_PATH: &str = "/api/user/topup";
pub const DEFAULT_API_USER_KEY: &str = "new-api-user";

/// Builds a per-account check-in URL from `(origin, user_id)`.
pub type CheckInUrlFn = fn(origin: &str, user_id: &str) -> String;

/// Pulls a redemption code out of an account record for providers with a
/// manual top-up flow.
pub type CdkResolver = fn(account: &AccountConfig) -> Option<String>;

/// How a provider's check-in endpoint is addressed.
#[derive(Debug, Clone, Default)]
pub enum CheckInPath {
    /// Provider has no check-in endpoint; reading status is enough.
    #[default]
    Absent,
    /// Fixed path appended to the origin.
    Fixed(String),
    /// Path depends on the account, e.g. embeds the user id.
    Computed(CheckInUrlFn),
}

impl CheckInPath {
    pub fn is_absent(&self) -> bool {
        matches!(self, CheckInPath::Absent)
    }
}

/// Anti-bot challenge strategy required to reach a provider's API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BypassMethod {
    #[default]
    None,
    WafCookies,
    CfClearance,
}

impl BypassMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BypassMethod::None => "none",
            BypassMethod::WafCookies => "waf_cookies",
            BypassMethod::CfClearance => "cf_clearance",
        }
    }
}

impl FromStr for BypassMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(BypassMethod::None),
            "waf_cookies" => Ok(BypassMethod::WafCookies),
            "cf_clearance" => Ok(BypassMethod::CfClearance),
            _ => Err(DomainError::InvalidInput(format!(
                "Unknown bypass method: {s}"
            ))),
        }
    }
}

impl fmt::Display for BypassMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static description of one provider's endpoints and bypass requirements.
/// Immutable after construction; all URL getters are pure concatenations
/// over `origin` and never fail.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub name: String,
    /// Base URL, no trailing slash.
    pub origin: String,
    pub login_path: Option<String>,
    /// Always non-empty and always begins with `/`.
    pub auth_state_path: String,
    pub status_path: Option<String>,
    pub topup_path: Option<String>,
    pub check_in_path: CheckInPath,
    pub bypass_method: BypassMethod,
    /// Header name used to identify the account to the provider API.
    pub api_user_key: String,
    /// Present only for providers supporting redemption-code top-up.
    pub cdk_resolver: Option<CdkResolver>,
    /// True when loaded from a user-supplied override rather than the
    /// built-in table.
    pub customized: bool,
}

impl ProviderConfig {
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            login_path: Some(DEFAULT_LOGIN_PATH.to_string()),
            auth_state_path: DEFAULT_AUTH_STATE_PATH.to_string(),
            status_path: Some(DEFAULT_STATUS_PATH.to_string()),
            topup_path: Some(DEFAULT_TOPUP_PATH.to_string()),
            check_in_path: CheckInPath::Absent,
            bypass_method: BypassMethod::None,
            api_user_key: DEFAULT_API_USER_KEY.to_string(),
            cdk_resolver: None,
            customized: false,
        }
    }

    pub fn with_login_path(mut self, path: Option<&str>) -> Self {
        self.login_path = path.map(str::to_string);
        self
    }

    pub fn with_auth_state_path(mut self, path: &str) -> Self {
        self.auth_state_path = path.to_string();
        self
    }

    pub fn with_status_path(mut self, path: Option<&str>) -> Self {
        self.status_path = path.map(str::to_string);
        self
    }

    pub fn with_topup_path(mut self, path: Option<&str>) -> Self {
        self.topup_path = path.map(str::to_string);
        self
    }

    pub fn with_check_in(mut self, path: CheckInPath) -> Self {
        self.check_in_path = path;
        self
    }

    pub fn with_bypass(mut self, method: BypassMethod) -> Self {
        self.bypass_method = method;
        self
    }

    pub fn with_api_user_key(mut self, key: &str) -> Self {
        self.api_user_key = key.to_string();
        self
    }

    pub fn with_cdk_resolver(mut self, resolver: CdkResolver) -> Self {
        self.cdk_resolver = Some(resolver);
        self
    }

    /// Build from a loosely-typed JSON object. Absent fields take the
    /// documented defaults; unrecognized keys are ignored, not preserved
    /// (unlike `AccountConfig`, which keeps them in `extra`).
    pub fn from_json(name: &str, data: &Value, customized: bool) -> Self {
        let origin = data
            .get("origin")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let mut config = Self::new(name, origin);
        config.customized = customized;

        config.login_path = optional_path(data, "login_path", Some(DEFAULT_LOGIN_PATH));
        config.status_path = optional_path(data, "status_path", Some(DEFAULT_STATUS_PATH));
        config.topup_path = optional_path(data, "topup_path", Some(DEFAULT_TOPUP_PATH));

        if let Some(path) = data.get("auth_state_path").and_then(Value::as_str) {
            if !path.is_empty() {
                config.auth_state_path = path.to_string();
            }
        }
        if let Some(path) = data.get("check_in_path").and_then(Value::as_str) {
            config.check_in_path = CheckInPath::Fixed(path.to_string());
        }
        if let Some(method) = data.get("bypass_method").and_then(Value::as_str) {
            config.bypass_method = method.parse().unwrap_or_default();
        }
        if let Some(key) = data.get("api_user_key").and_then(Value::as_str) {
            config.api_user_key = key.to_string();
        }

        config
    }

    pub fn auth_state_url(&self) -> String {
        format!("{}{}", self.origin, self.auth_state_path)
    }

    pub fn login_url(&self) -> Option<String> {
        self.join(self.login_path.as_deref())
    }

    pub fn status_url(&self) -> Option<String> {
        self.join(self.status_path.as_deref())
    }

    pub fn topup_url(&self) -> Option<String> {
        self.join(self.topup_path.as_deref())
    }

    pub fn check_in_url(&self, user_id: &str) -> Option<String> {
        match &self.check_in_path {
            CheckInPath::Absent => None,
            CheckInPath::Fixed(path) => Some(format!("{}{}", self.origin, path)),
            CheckInPath::Computed(build) => Some(build(&self.origin, user_id)),
        }
    }

    pub fn needs_waf_cookies(&self) -> bool {
        self.bypass_method == BypassMethod::WafCookies
    }

    pub fn needs_cf_clearance(&self) -> bool {
        self.bypass_method == BypassMethod::CfClearance
    }

    /// The automation layer must visit a check-in page rather than only
    /// reading balance status.
    pub fn needs_manual_check_in(&self) -> bool {
        !self.check_in_path.is_absent()
    }

    /// Manual top-up needs both a redemption endpoint and a way to obtain
    /// the code.
    pub fn needs_manual_topup(&self) -> bool {
        self.topup_path.is_some() && self.cdk_resolver.is_some()
    }

    // Both OAuth providers currently redirect through /oauth/** under the
    // provider origin, so the two patterns match today. Kept as separate
    // accessors for call-site clarity until per-provider OAuth redirect
    // domains are confirmed.
    pub fn linuxdo_auth_redirect_pattern(&self) -> String {
        format!("**{}/oauth/**", self.origin)
    }

    pub fn github_auth_redirect_pattern(&self) -> String {
        format!("**{}/oauth/**", self.origin)
    }

    fn join(&self, path: Option<&str>) -> Option<String> {
        path.map(|p| format!("{}{}", self.origin, p))
    }
}

/// Read an optional path field: absent keeps the default, an explicit null
/// (or any non-string) clears it.
fn optional_path(data: &Value, key: &str, default: Option<&str>) -> Option<String> {
    match data.get(key) {
        None => default.map(str::to_string),
        Some(Value::String(path)) => Some(path.clone()),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> ProviderConfig {
        ProviderConfig::new("test", "https://example.com")
    }

    #[test]
    fn default_auth_state_path_has_leading_slash() {
        assert_eq!(provider().auth_state_path, "/api/oauth/state");
    }

    #[test]
    fn from_json_defaults() {
        let config = ProviderConfig::from_json("test", &json!({"origin": "https://example.com"}), false);
        assert_eq!(config.name, "test");
        assert_eq!(config.origin, "https://example.com");
        assert_eq!(config.login_path.as_deref(), Some("/login"));
        assert_eq!(config.auth_state_path, "/api/oauth/state");
        assert!(!config.customized);
    }

    #[test]
    fn from_json_custom_fields() {
        let data = json!({
            "origin": "https://example.com",
            "login_path": "/custom-login",
            "api_user_key": "x-api-user",
            "bypass_method": "waf_cookies",
        });
        let config = ProviderConfig::from_json("test", &data, true);
        assert_eq!(config.login_path.as_deref(), Some("/custom-login"));
        assert_eq!(config.api_user_key, "x-api-user");
        assert_eq!(config.bypass_method, BypassMethod::WafCookies);
        assert!(config.customized);
    }

    #[test]
    fn from_json_ignores_unrecognized_keys() {
        let data = json!({"origin": "https://example.com", "unexpected": "value"});
        let config = ProviderConfig::from_json("test", &data, false);
        assert_eq!(config.origin, "https://example.com");
    }

    #[test]
    fn from_json_null_clears_topup_path() {
        let data = json!({"origin": "https://example.com", "topup_path": null});
        let config = ProviderConfig::from_json("test", &data, false);
        assert_eq!(config.topup_url(), None);
    }

    #[test]
    fn url_getters_concatenate_origin() {
        let config = provider();
        assert_eq!(
            config.auth_state_url(),
            "https://example.com/api/oauth/state"
        );
        assert_eq!(
            config.login_url().as_deref(),
            Some("https://example.com/login")
        );
        assert_eq!(
            config.status_url().as_deref(),
            Some("https://example.com/api/status")
        );
        assert_eq!(
            config.topup_url().as_deref(),
            Some("https://example.com/api/user/topup")
        );
    }

    #[test]
    fn check_in_url_absent() {
        assert_eq!(provider().check_in_url("user1"), None);
    }

    #[test]
    fn check_in_url_fixed() {
        let config = provider().with_check_in(CheckInPath::Fixed("/api/user/checkin".into()));
        assert_eq!(
            config.check_in_url("user1").as_deref(),
            Some("https://example.com/api/user/checkin")
        );
    }

    #[test]
    fn check_in_url_computed() {
        fn custom(origin: &str, user_id: &str) -> String {
            format!("{origin}/api/checkin/{user_id}")
        }
        let config = provider().with_check_in(CheckInPath::Computed(custom));
        assert_eq!(
            config.check_in_url("user1").as_deref(),
            Some("https://example.com/api/checkin/user1")
        );
    }

    #[test]
    fn bypass_predicates() {
        let waf = provider().with_bypass(BypassMethod::WafCookies);
        assert!(waf.needs_waf_cookies());
        assert!(!waf.needs_cf_clearance());

        let cf = provider().with_bypass(BypassMethod::CfClearance);
        assert!(cf.needs_cf_clearance());
        assert!(!cf.needs_waf_cookies());
    }

    #[test]
    fn unknown_bypass_method_falls_back_to_none() {
        let data = json!({"origin": "https://example.com", "bypass_method": "carrier-pigeon"});
        let config = ProviderConfig::from_json("test", &data, false);
        assert_eq!(config.bypass_method, BypassMethod::None);
    }

    #[test]
    fn needs_manual_check_in() {
        assert!(!provider().needs_manual_check_in());
        assert!(provider()
            .with_check_in(CheckInPath::Fixed("/api/user/checkin".into()))
            .needs_manual_check_in());
    }

    #[test]
    fn needs_manual_topup_requires_both_parts() {
        fn resolver(account: &crate::account::AccountConfig) -> Option<String> {
            account
                .get("cdk")
                .and_then(|v| v.as_str().map(str::to_string))
        }

        let both = provider().with_cdk_resolver(resolver);
        assert!(both.needs_manual_topup());

        let no_endpoint = provider()
            .with_topup_path(None)
            .with_cdk_resolver(resolver);
        assert!(!no_endpoint.needs_manual_topup());

        assert!(!provider().needs_manual_topup());
    }

    #[test]
    fn oauth_redirect_patterns() {
        let config = provider();
        assert_eq!(
            config.linuxdo_auth_redirect_pattern(),
            "**https://example.com/oauth/**"
        );
        assert_eq!(
            config.github_auth_redirect_pattern(),
            "**https://example.com/oauth/**"
        );
    }
}
