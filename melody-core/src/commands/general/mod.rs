pub mod avatar;
pub mod help;

pub use avatar::{avatar, resolve_member, AvatarArgs};
pub use help::{help, HelpArgs};

use crate::commands::CommandDescriptor;

pub fn general_commands() -> [CommandDescriptor; 2] {
    [avatar::descriptor(), help::descriptor()]
}
