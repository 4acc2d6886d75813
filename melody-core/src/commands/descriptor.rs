use crate::commands::CommandRegistry;
use crate::locale::{replace, CommandLayout, Locale};
use crate::platform::Platform;
use crate::playlist::PlaylistStore;
use futures::future::BoxFuture;
use itertools::Itertools;
use melody_types::{GuildId, MelodyResult, Permissions};
use std::fmt;

/// Status string a command returns, logged by the dispatcher.
pub type CommandStatus = &'static str;
pub type CommandFuture<'a> = BoxFuture<'a, MelodyResult<CommandStatus>>;
pub type ExecuteFn = for<'a> fn(Invocation<'a>) -> CommandFuture<'a>;

/// Everything the dispatcher knows about one invocation. Commands pick the
/// parts they need out of this into their own argument struct.
pub struct Invocation<'a> {
    pub guild_id: Option<GuildId>,
    pub prefix: &'a str,
    pub args: Vec<String>,
    pub platform: &'a dyn Platform,
    pub locale: &'a Locale,
    pub playlists: &'a PlaylistStore,
    pub registry: &'a CommandRegistry,
}

/// Metadata for a single command along with the function that runs it.
#[derive(Clone)]
pub struct CommandDescriptor {
    /// Display name.
    pub name: &'static str,
    pub category: &'static str,
    /// Key of the command's text block in the locale, under `category`.
    pub locale_key: &'static str,
    /// Tokens that invoke the command. Never empty.
    pub aliases: Vec<&'static str>,
    /// Aliases of a parent command, shown before ours in the usage line.
    pub super_command: Vec<&'static str>,
    pub opt_args: Vec<&'static str>,
    pub req_args: Vec<&'static str>,
    /// Accept any number of trailing arguments.
    pub unlimited_args: bool,
    pub nsfw: bool,
    pub permissions: Permissions,
    /// Listed by `help`.
    pub show_command: bool,
    pub execute: ExecuteFn,
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("aliases", &self.aliases)
            .field("req_args", &self.req_args)
            .field("opt_args", &self.opt_args)
            .field("unlimited_args", &self.unlimited_args)
            .field("nsfw", &self.nsfw)
            .field("permissions", &self.permissions)
            .field("show_command", &self.show_command)
            .finish_non_exhaustive()
    }
}

impl CommandDescriptor {
    /// The most argument tokens this command takes, `None` when unlimited.
    pub fn max_args(&self) -> Option<usize> {
        (!self.unlimited_args).then_some(self.req_args.len() + self.opt_args.len())
    }

    pub fn usage(&self, prefix: &str, layout: &CommandLayout) -> String {
        command_usage(prefix, self, layout)
    }
}

fn render_aliases(aliases: &[&str], layout: &CommandLayout) -> String {
    aliases
        .iter()
        .sorted()
        .map(|alias| replace(&layout.command, &[alias]))
        .join(&layout.divider)
}

/// Build the usage line of a command, e.g. `` `m! avatar <username>` ``.
pub fn command_usage(prefix: &str, command: &CommandDescriptor, layout: &CommandLayout) -> String {
    let required = command
        .req_args
        .iter()
        .map(|arg| replace(&layout.required_args, &[arg]));
    let optional = command
        .opt_args
        .iter()
        .map(|arg| replace(&layout.optional_args, &[arg]));

    let line = [
        prefix.to_string(),
        render_aliases(&command.super_command, layout),
        render_aliases(&command.aliases, layout),
    ]
    .into_iter()
    .chain(required)
    .chain(optional)
    .filter(|part| !part.is_empty())
    .join(" ");

    replace(&layout.content, &[line])
}

#[cfg(test)]
mod test {
    use super::*;

    fn noop(_: Invocation<'_>) -> CommandFuture<'_> {
        Box::pin(async { Ok("noop") })
    }

    fn descriptor() -> CommandDescriptor {
        CommandDescriptor {
            name: "example",
            category: "general",
            locale_key: "example",
            aliases: vec!["ex", "example"],
            super_command: vec![],
            opt_args: vec!["count"],
            req_args: vec!["user"],
            unlimited_args: false,
            nsfw: false,
            permissions: Permissions::empty(),
            show_command: true,
            execute: noop,
        }
    }

    fn layout() -> CommandLayout {
        Locale::embedded().unwrap().command_layout
    }

    #[test]
    fn test_command_usage() {
        assert_eq!(
            command_usage("m!", &descriptor(), &layout()),
            "`m! ex|example <user> [count]`"
        );
    }

    #[test]
    fn test_command_usage_sorts_aliases_and_super_command() {
        let mut command = descriptor();
        command.aliases = vec!["zeta", "alpha"];
        command.super_command = vec!["set", "config"];
        command.req_args = vec![];
        command.opt_args = vec![];
        assert_eq!(
            command_usage("m!", &command, &layout()),
            "`m! config|set alpha|zeta`"
        );
    }

    #[test]
    fn test_max_args() {
        let mut command = descriptor();
        assert_eq!(command.max_args(), Some(2));
        command.unlimited_args = true;
        assert_eq!(command.max_args(), None);
    }
}
