mod notification_kit;

pub use notification_kit::{ChannelSettings, NotificationKit, PushSummary};
