pub mod reply;

pub use reply::{BotIdentity, RichReply};
