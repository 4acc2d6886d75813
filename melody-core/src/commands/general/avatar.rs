use crate::commands::{CommandDescriptor, CommandFuture, CommandStatus, Invocation};
use crate::locale::CommandText;
use crate::messaging::reply::COLOR_AVATAR;
use crate::messaging::RichReply;
use crate::platform::{MemberDirectory, MemberInfo, ReplySink};
use crate::utils::strip_mention_decorations;
use melody_types::{GuildId, MelodyError, MelodyResult, Permissions};

pub const STATUS_SUCCESS: CommandStatus = "Success";
pub const STATUS_NO_USER: CommandStatus = "Failed to find a user";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor {
        name: "avatar",
        category: "general",
        locale_key: "avatar",
        aliases: vec!["avatar"],
        super_command: vec![],
        opt_args: vec![],
        req_args: vec!["username"],
        unlimited_args: false,
        nsfw: false,
        permissions: Permissions::empty(),
        show_command: true,
        execute,
    }
}

/// Arguments of the avatar command.
pub struct AvatarArgs<'a> {
    pub guild_id: GuildId,
    /// Username, tag, id or mention of the member, decorations included.
    pub user: String,
    pub members: &'a dyn MemberDirectory,
    pub replies: &'a dyn ReplySink,
    pub text: &'a CommandText,
}

impl<'a> AvatarArgs<'a> {
    pub fn from_invocation(invocation: Invocation<'a>) -> MelodyResult<Self> {
        let guild_id = invocation.guild_id.ok_or(MelodyError::NoGuildId)?;
        let user = invocation
            .args
            .into_iter()
            .next()
            .ok_or_else(|| MelodyError::MissingArguments {
                usage: "username".to_string(),
            })?;
        Ok(Self {
            guild_id,
            user,
            members: invocation.platform.members(),
            replies: invocation.platform.replies(),
            text: invocation.locale.command("general", "avatar")?,
        })
    }
}

fn execute(invocation: Invocation<'_>) -> CommandFuture<'_> {
    Box::pin(async move { avatar(AvatarArgs::from_invocation(invocation)?).await })
}

/// Find a member by id first, then by exact username or tag among the cached members.
pub async fn resolve_member(
    members: &dyn MemberDirectory,
    guild_id: GuildId,
    user: &str,
) -> Option<MemberInfo> {
    let needle = strip_mention_decorations(user);
    match members.fetch_member(guild_id, &needle).await {
        Ok(member) => Some(member),
        Err(err) => {
            tracing::debug!("Falling back to the member cache: {}", err);
            members
                .cached_members(guild_id)
                .into_iter()
                .find(|member| {
                    member.username == needle || strip_mention_decorations(&member.tag) == needle
                })
        },
    }
}

/// Reply with the avatar of the requested member.
pub async fn avatar(args: AvatarArgs<'_>) -> MelodyResult<CommandStatus> {
    match resolve_member(args.members, args.guild_id, &args.user).await {
        Some(member) => {
            let reply = RichReply::new(COLOR_AVATAR, &args.text.title, &args.text.success)
                .with_image(member.avatar_url);
            args.replies.send_reply(reply).await?;
            Ok(STATUS_SUCCESS)
        },
        None => {
            let reply = RichReply::failure(&args.text.title, args.text.error("noUser"));
            args.replies.send_reply(reply).await?;
            Ok(STATUS_NO_USER)
        },
    }
}
