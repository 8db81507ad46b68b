mod config;

pub use config::{
    BypassMethod, CdkResolver, CheckInPath, CheckInUrlFn, ProviderConfig, DEFAULT_API_USER_KEY,
    DEFAULT_AUTH_STATE_PATH, DEFAULT_LOGIN_PATH, DEFAULT_STATUS_PATH, DEFAULT_TOPUP_PATH,
};
