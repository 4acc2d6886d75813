pub mod descriptor;
pub mod general;
pub mod registry;
pub mod voice;

pub use descriptor::*;
pub use general::*;
pub use registry::*;
pub use voice::*;

use melody_types::MelodyResult;

/// Return all the commands that are available in the bot.
pub fn all_commands() -> Vec<CommandDescriptor> {
    general::general_commands()
        .into_iter()
        .chain(voice::voice_commands())
        .collect()
}

/// Build the registry of every available command.
pub fn default_registry() -> MelodyResult<CommandRegistry> {
    CommandRegistry::new(all_commands())
}

pub fn all_command_names() -> Vec<&'static str> {
    all_commands().into_iter().map(|c| c.name).collect()
}
