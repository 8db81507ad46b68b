mod message;
mod sender;

pub use message::{MessageKind, NotificationMessage};
pub use sender::{ChannelKind, ChannelSender, NotifyError};
