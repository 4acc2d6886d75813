use crate::commands::{CommandDescriptor, CommandStatus, Invocation};
use crate::locale::Locale;
use crate::messaging::RichReply;
use crate::platform::Platform;
use crate::playlist::PlaylistStore;
use crate::utils::{check_result, permissions_string};
use melody_types::messaging::messages::ERROR;
use melody_types::{GuildId, MelodyError, MelodyResult, Permissions};
use std::collections::HashMap;

/// Furthest an unknown alias may be from a known one to be suggested.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// One inbound message, as seen by the dispatcher.
pub struct DispatchRequest<'a> {
    pub prefix: &'a str,
    pub content: &'a str,
    pub guild_id: Option<GuildId>,
    pub platform: &'a dyn Platform,
    pub locale: &'a Locale,
    pub playlists: &'a PlaylistStore,
}

/// Matches alias tokens to commands and runs them.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
    aliases: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Build the registry. Aliases are case-insensitive and must be unique.
    pub fn new(commands: Vec<CommandDescriptor>) -> MelodyResult<Self> {
        let mut aliases = HashMap::new();
        for (idx, command) in commands.iter().enumerate() {
            if command.aliases.is_empty() {
                return Err(MelodyError::Other("⚠️ A command needs at least one alias!"));
            }
            for alias in &command.aliases {
                if aliases.insert(alias.to_lowercase(), idx).is_some() {
                    return Err(MelodyError::DuplicateAlias(alias.to_string()));
                }
            }
        }
        Ok(Self { commands, aliases })
    }

    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Commands listed by `help`.
    pub fn visible(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter().filter(|command| command.show_command)
    }

    pub fn resolve(&self, alias: &str) -> Option<&CommandDescriptor> {
        self.aliases
            .get(&alias.to_lowercase())
            .map(|idx| &self.commands[*idx])
    }

    /// Closest known alias to `alias`, if any is close enough.
    pub fn suggest(&self, alias: &str) -> Option<String> {
        let alias = alias.to_lowercase();
        self.aliases
            .keys()
            .map(|known| (strsim::levenshtein(known, &alias), known))
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min()
            .map(|(_, known)| known.clone())
    }

    /// Split a message into its alias and argument tokens. `None` when the
    /// message doesn't start with the prefix or has nothing after it.
    pub fn parse(prefix: &str, content: &str) -> Option<(String, Vec<String>)> {
        let content = content.trim_start();
        let head = content.get(..prefix.len())?;
        if prefix.is_empty() || !head.eq_ignore_ascii_case(prefix) {
            return None;
        }
        let mut tokens = content[prefix.len()..].split_whitespace();
        let alias = tokens.next()?.to_lowercase();
        Some((alias, tokens.map(str::to_string).collect()))
    }

    /// Check that `args` fits what `command` accepts.
    pub fn check_arity(
        command: &CommandDescriptor,
        args: &[String],
        usage: impl FnOnce() -> String,
    ) -> MelodyResult<()> {
        if args.len() < command.req_args.len() {
            return Err(MelodyError::MissingArguments { usage: usage() });
        }
        match command.max_args() {
            Some(max) if args.len() > max => Err(MelodyError::TooManyArguments { usage: usage() }),
            _ => Ok(()),
        }
    }

    async fn check_permissions(
        command: &CommandDescriptor,
        platform: &dyn Platform,
    ) -> MelodyResult<()> {
        if command.permissions.is_empty() {
            return Ok(());
        }
        let granted = platform.gate().author_permissions().await?;
        if granted.contains(Permissions::ADMINISTRATOR) || granted.contains(command.permissions) {
            Ok(())
        } else {
            let missing = command.permissions - granted;
            Err(MelodyError::MissingPermissions(permissions_string(
                missing, false,
            )))
        }
    }

    /// Run every gate for `command`, then the command itself.
    async fn run(
        &self,
        command: &CommandDescriptor,
        args: Vec<String>,
        request: &DispatchRequest<'_>,
    ) -> MelodyResult<CommandStatus> {
        if command.nsfw && !request.platform.gate().is_nsfw_channel().await {
            return Err(MelodyError::NsfwOnly);
        }
        Self::check_permissions(command, request.platform).await?;
        Self::check_arity(command, &args, || {
            command.usage(request.prefix, &request.locale.command_layout)
        })?;

        let invocation = Invocation {
            guild_id: request.guild_id,
            prefix: request.prefix,
            args,
            platform: request.platform,
            locale: request.locale,
            playlists: request.playlists,
            registry: self,
        };
        (command.execute)(invocation).await
    }

    /// Dispatch one message. Returns `Ok(None)` when the message isn't a
    /// command. Any failure is reported back to the channel before being
    /// returned.
    pub async fn dispatch(
        &self,
        request: DispatchRequest<'_>,
    ) -> MelodyResult<Option<CommandStatus>> {
        let Some((alias, args)) = Self::parse(request.prefix, request.content) else {
            return Ok(None);
        };

        let Some(command) = self.resolve(&alias) else {
            let err = MelodyError::UnknownCommand {
                suggestion: self.suggest(&alias),
                alias,
            };
            Self::report(&request, ERROR, &err).await;
            return Err(err);
        };

        tracing::info!(">>> {}...", command.name);
        match self.run(command, args, &request).await {
            Ok(status) => {
                tracing::info!("<<< {}: {}", command.name, status);
                Ok(Some(status))
            },
            Err(err) => {
                tracing::warn!("<<< {} failed: {}", command.name, err);
                let title = request
                    .locale
                    .command(command.category, command.locale_key)
                    .map(|text| text.title.as_str())
                    .unwrap_or(command.name);
                Self::report(&request, title, &err).await;
                Err(err)
            },
        }
    }

    async fn report(request: &DispatchRequest<'_>, title: &str, err: &MelodyError) {
        let reply = RichReply::failure(title, err.to_string());
        check_result(request.platform.replies().send_reply(reply).await);
    }
}
