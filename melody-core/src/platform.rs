//! The seam between commands and the chat platform. Commands only ever talk
//! to these traits; [`SerenityPlatform`] backs them with a live client.
use crate::messaging::{BotIdentity, RichReply};
use async_trait::async_trait;
use melody_types::{GuildId, MelodyError, MelodyResult, Permissions, UserId};
use serenity::all::{Channel, Context as SerenityContext, CreateMessage, Member, Message};

const NO_GUILD_CACHED: &str = "⚠️ No Cached Guild Found!";
const NO_CHANNEL_CACHED: &str = "⚠️ No Cached Channel Found!";

/// What commands need to know about a guild member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub id: UserId,
    pub username: String,
    pub tag: String,
    pub avatar_url: String,
}

impl From<&Member> for MemberInfo {
    fn from(member: &Member) -> Self {
        Self {
            id: member.user.id,
            username: member.user.name.clone(),
            tag: member.user.tag(),
            avatar_url: member.user.face(),
        }
    }
}

/// Member lookups.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Look a member up by id. Fails with [`MelodyError::MemberNotFound`]
    /// when `id` is not an id or no member has it.
    async fn fetch_member(&self, guild_id: GuildId, id: &str) -> MelodyResult<MemberInfo>;

    /// Members of the guild currently in the cache.
    fn cached_members(&self, guild_id: GuildId) -> Vec<MemberInfo>;
}

/// Where replies go.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_reply(&self, reply: RichReply) -> MelodyResult<()>;
}

/// Facts about the invoking author and channel used to gate commands.
#[async_trait]
pub trait ChannelGate: Send + Sync {
    async fn author_permissions(&self) -> MelodyResult<Permissions>;
    async fn is_nsfw_channel(&self) -> bool;
}

/// Everything the dispatcher can hand to a command.
pub trait Platform: MemberDirectory + ReplySink + ChannelGate {
    fn members(&self) -> &dyn MemberDirectory;
    fn replies(&self) -> &dyn ReplySink;
    fn gate(&self) -> &dyn ChannelGate;
}

impl<T: MemberDirectory + ReplySink + ChannelGate> Platform for T {
    fn members(&self) -> &dyn MemberDirectory {
        self
    }

    fn replies(&self) -> &dyn ReplySink {
        self
    }

    fn gate(&self) -> &dyn ChannelGate {
        self
    }
}

/// Parse a user supplied id, rejecting anything that can't be a snowflake.
pub fn parse_user_id(id: &str) -> Option<UserId> {
    id.parse::<u64>().ok().filter(|id| *id != 0).map(UserId::new)
}

/// The live platform for one inbound message.
pub struct SerenityPlatform<'a> {
    ctx: &'a SerenityContext,
    msg: &'a Message,
    bot: &'a BotIdentity,
}

impl<'a> SerenityPlatform<'a> {
    pub fn new(ctx: &'a SerenityContext, msg: &'a Message, bot: &'a BotIdentity) -> Self {
        Self { ctx, msg, bot }
    }
}

#[async_trait]
impl MemberDirectory for SerenityPlatform<'_> {
    async fn fetch_member(&self, guild_id: GuildId, id: &str) -> MelodyResult<MemberInfo> {
        let user_id = parse_user_id(id).ok_or_else(|| MelodyError::MemberNotFound(id.to_string()))?;
        match guild_id.member(self.ctx, user_id).await {
            Ok(member) => Ok(MemberInfo::from(&member)),
            Err(err) => {
                tracing::debug!("Member lookup for {} failed: {}", user_id, err);
                Err(MelodyError::MemberNotFound(id.to_string()))
            },
        }
    }

    fn cached_members(&self, guild_id: GuildId) -> Vec<MemberInfo> {
        self.ctx
            .cache
            .guild(guild_id)
            .map(|guild| guild.members.values().map(MemberInfo::from).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ReplySink for SerenityPlatform<'_> {
    async fn send_reply(&self, reply: RichReply) -> MelodyResult<()> {
        let message = CreateMessage::new().embed(reply.to_embed(self.bot));
        self.msg.channel_id.send_message(self.ctx, message).await?;
        Ok(())
    }
}

#[async_trait]
impl ChannelGate for SerenityPlatform<'_> {
    async fn author_permissions(&self) -> MelodyResult<Permissions> {
        let guild_id = self.msg.guild_id.ok_or(MelodyError::NoGuildId)?;
        let member = guild_id.member(self.ctx, self.msg.author.id).await?;

        let guild = self
            .ctx
            .cache
            .guild(guild_id)
            .ok_or(MelodyError::Other(NO_GUILD_CACHED))?;
        let channel = guild
            .channels
            .get(&self.msg.channel_id)
            .ok_or(MelodyError::Other(NO_CHANNEL_CACHED))?;
        Ok(guild.user_permissions_in(channel, &member))
    }

    async fn is_nsfw_channel(&self) -> bool {
        match self.msg.channel(self.ctx).await {
            Ok(Channel::Guild(channel)) => channel.nsfw,
            Ok(_) => false,
            Err(err) => {
                tracing::warn!("Could not fetch channel {}: {}", self.msg.channel_id, err);
                false
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("1234"), Some(UserId::new(1234)));
        assert_eq!(parse_user_id("0"), None);
        assert_eq!(parse_user_id("alice"), None);
        assert_eq!(parse_user_id(""), None);
    }
}
