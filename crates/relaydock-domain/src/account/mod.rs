use serde_json::{Map, Value};

/// Per-account credential record bound to a provider by name.
///
/// Input records are open-ended: every key that is not one of the declared
/// attributes is preserved verbatim in `extra`, so no field is ever lost.
#[derive(Debug, Clone, Default)]
pub struct AccountConfig {
    pub provider: String,
    pub cookies: Option<String>,
    pub api_user: Option<String>,
    /// Display override; see [`AccountConfig::display_name`].
    pub name: Option<String>,
    pub extra: Map<String, Value>,
}

impl AccountConfig {
    /// Build from a loosely-typed JSON object. Never errors: declared keys
    /// holding strings populate their attribute, everything else (including
    /// a declared key holding a non-string value) lands in `extra`.
    pub fn from_json(data: &Value) -> Self {
        let mut config = Self::default();
        let Some(object) = data.as_object() else {
            return config;
        };

        for (key, value) in object {
            match (key.as_str(), value.as_str()) {
                ("provider", Some(s)) => config.provider = s.to_string(),
                ("cookies", Some(s)) => config.cookies = Some(s.to_string()),
                ("api_user", Some(s)) => config.api_user = Some(s.to_string()),
                ("name", Some(s)) => config.name = Some(s.to_string()),
                _ => {
                    config.extra.insert(key.clone(), value.clone());
                }
            }
        }
        config
    }

    /// Three-tier lookup: declared attribute (if set), then `extra`, then
    /// None. Callers supply their own default.
    pub fn get(&self, key: &str) -> Option<Value> {
        let declared = match key {
            "provider" => (!self.provider.is_empty()).then(|| Value::String(self.provider.clone())),
            "cookies" => self.cookies.clone().map(Value::String),
            "api_user" => self.api_user.clone().map(Value::String),
            "name" => self.name.clone().map(Value::String),
            _ => None,
        };
        declared.or_else(|| self.extra.get(key).cloned())
    }

    /// Human-facing name: the explicit `name` override, or
    /// `"{provider} {index + 1}"` to disambiguate multiple accounts on the
    /// same provider (1-based numbering from a 0-based index).
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} {}", self.provider, index + 1),
        }
    }
}

/// Credentials for the username/password OAuth login flow, separate from
/// cookie-based accounts. Fixed shape, no extra bag.
#[derive(Debug, Clone, Default)]
pub struct OAuthAccountConfig {
    pub username: String,
    pub password: String,
}

impl OAuthAccountConfig {
    pub fn from_json(data: &Value) -> Self {
        Self {
            username: data
                .get("username")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            password: data
                .get("password")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_declared_fields() {
        let data = json!({"provider": "neb", "cookies": "abc=123", "api_user": "user1"});
        let config = AccountConfig::from_json(&data);
        assert_eq!(config.provider, "neb");
        assert_eq!(config.cookies.as_deref(), Some("abc=123"));
        assert_eq!(config.api_user.as_deref(), Some("user1"));
        assert!(config.extra.is_empty());
    }

    #[test]
    fn from_json_preserves_extra_fields() {
        let data = json!({
            "provider": "x666",
            "cookies": "abc=123",
            "access_token": "mytoken123",
            "retries": 3,
        });
        let config = AccountConfig::from_json(&data);
        assert_eq!(config.extra.get("access_token"), Some(&json!("mytoken123")));
        assert_eq!(config.get("access_token"), Some(json!("mytoken123")));
        assert_eq!(config.get("retries"), Some(json!(3)));
    }

    #[test]
    fn from_json_keeps_non_string_declared_value() {
        // A declared key holding the wrong type must not be dropped.
        let data = json!({"provider": "neb", "cookies": {"session": "abc"}});
        let config = AccountConfig::from_json(&data);
        assert_eq!(config.cookies, None);
        assert_eq!(config.extra.get("cookies"), Some(&json!({"session": "abc"})));
    }

    #[test]
    fn get_declared_attribute() {
        let config = AccountConfig {
            provider: "test".into(),
            api_user: Some("user1".into()),
            ..Default::default()
        };
        assert_eq!(config.get("provider"), Some(json!("test")));
        assert_eq!(config.get("api_user"), Some(json!("user1")));
    }

    #[test]
    fn get_falls_back_to_extra_then_none() {
        let mut extra = Map::new();
        extra.insert("access_token".into(), json!("tok123"));
        let config = AccountConfig {
            provider: "test".into(),
            extra,
            ..Default::default()
        };
        assert_eq!(config.get("access_token"), Some(json!("tok123")));
        assert_eq!(config.get("nonexistent"), None);
    }

    #[test]
    fn display_name_prefers_override() {
        let config = AccountConfig {
            provider: "test".into(),
            name: Some("My Account".into()),
            ..Default::default()
        };
        assert_eq!(config.display_name(0), "My Account");
    }

    #[test]
    fn display_name_numbers_from_one() {
        let config = AccountConfig {
            provider: "neb".into(),
            ..Default::default()
        };
        assert_eq!(config.display_name(0), "neb 1");
        assert_eq!(config.display_name(2), "neb 3");
    }

    #[test]
    fn oauth_account_from_json() {
        let config = OAuthAccountConfig::from_json(&json!({"username": "user", "password": "pass"}));
        assert_eq!(config.username, "user");
        assert_eq!(config.password, "pass");
    }
}
