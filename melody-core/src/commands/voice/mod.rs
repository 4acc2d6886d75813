pub mod now_playing;

pub use now_playing::{now_playing, now_playing_description, queue_listing, NowPlayingArgs};

use crate::commands::CommandDescriptor;

pub fn voice_commands() -> [CommandDescriptor; 1] {
    [now_playing::descriptor()]
}
