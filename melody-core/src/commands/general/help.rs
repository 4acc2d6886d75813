use crate::commands::{CommandDescriptor, CommandFuture, CommandRegistry, CommandStatus, Invocation};
use crate::locale::{replace, Locale};
use crate::messaging::reply::COLOR_HELP;
use crate::messaging::RichReply;
use crate::platform::ReplySink;
use crate::utils::permissions_string;
use itertools::Itertools;
use melody_types::{MelodyResult, Permissions};

pub const STATUS_LISTED: CommandStatus = "Listed commands";
pub const STATUS_DESCRIBED: CommandStatus = "Described command";
pub const STATUS_NO_COMMAND: CommandStatus = "Failed to find a command";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor {
        name: "help",
        category: "general",
        locale_key: "help",
        aliases: vec!["help", "h"],
        super_command: vec![],
        opt_args: vec!["command"],
        req_args: vec![],
        unlimited_args: false,
        nsfw: false,
        permissions: Permissions::empty(),
        show_command: true,
        execute,
    }
}

/// Arguments of the help command.
pub struct HelpArgs<'a> {
    /// Alias of the command to describe, every command when `None`.
    pub query: Option<String>,
    pub prefix: &'a str,
    pub registry: &'a CommandRegistry,
    pub locale: &'a Locale,
    pub replies: &'a dyn ReplySink,
}

impl<'a> HelpArgs<'a> {
    pub fn from_invocation(invocation: Invocation<'a>) -> Self {
        Self {
            query: invocation.args.into_iter().next(),
            prefix: invocation.prefix,
            registry: invocation.registry,
            locale: invocation.locale,
            replies: invocation.platform.replies(),
        }
    }

    fn description_of(&self, command: &CommandDescriptor) -> &'a str {
        self.locale
            .command(command.category, command.locale_key)
            .map(|text| text.description.as_str())
            .unwrap_or_default()
    }
}

fn execute(invocation: Invocation<'_>) -> CommandFuture<'_> {
    Box::pin(async move { help(HelpArgs::from_invocation(invocation)).await })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Every listed command grouped by category, with its usage line.
pub fn command_listing(args: &HelpArgs<'_>, category_template: &str) -> String {
    let layout = &args.locale.command_layout;
    let by_category = args
        .registry
        .visible()
        .into_group_map_by(|command| command.category);

    let mut listing = String::new();
    for category in by_category.keys().sorted() {
        listing.push_str(&replace(category_template, &[capitalize(category)]));
        listing.push('\n');
        for command in &by_category[category] {
            listing.push_str(&format!(
                "{}  {}\n",
                command.usage(args.prefix, layout),
                args.description_of(command)
            ));
        }
    }
    listing
}

/// List every command, or describe the one asked for.
pub async fn help(args: HelpArgs<'_>) -> MelodyResult<CommandStatus> {
    let text = args.locale.command("general", "help")?;

    let Some(query) = args.query.as_deref() else {
        let listing = command_listing(&args, &text.category);
        let reply = RichReply::new(COLOR_HELP, &text.title, listing.trim_end());
        args.replies.send_reply(reply).await?;
        return Ok(STATUS_LISTED);
    };

    match args.registry.resolve(query) {
        Some(command) => {
            let permissions = match permissions_string(command.permissions, false) {
                perms if perms.is_empty() => text.no_permissions.clone(),
                perms => perms,
            };
            let usage = command.usage(args.prefix, &args.locale.command_layout);
            let description = replace(
                &text.content,
                &[usage.as_str(), permissions.as_str(), args.description_of(command)],
            );
            let reply = RichReply::new(COLOR_HELP, capitalize(command.name), description);
            args.replies.send_reply(reply).await?;
            Ok(STATUS_DESCRIBED)
        },
        None => {
            let reply = RichReply::failure(&text.title, replace(text.error("noCommand"), &[query]));
            args.replies.send_reply(reply).await?;
            Ok(STATUS_NO_COMMAND)
        },
    }
}
