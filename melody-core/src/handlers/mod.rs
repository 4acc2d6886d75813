pub mod serenity;

pub use self::serenity::{handle_event, handle_message};
