use crate::messaging::RichReply;
use crate::platform::{parse_user_id, ChannelGate, MemberDirectory, MemberInfo, ReplySink};
use async_trait::async_trait;
use melody_types::{GuildId, MelodyError, MelodyResult, Permissions, UserId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory platform: a fixed member list, and every reply recorded.
pub struct MockPlatform {
    pub members: Vec<MemberInfo>,
    pub permissions: Permissions,
    pub nsfw: bool,
    sent: Mutex<Vec<RichReply>>,
    fetches: AtomicUsize,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            members: vec![],
            permissions: Permissions::empty(),
            nsfw: false,
            sent: Mutex::new(vec![]),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_member(mut self, id: u64, username: &str, tag: &str) -> Self {
        self.members.push(member(id, username, tag));
        self
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    /// Replies sent so far, oldest first.
    pub fn sent(&self) -> Vec<RichReply> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

pub fn member(id: u64, username: &str, tag: &str) -> MemberInfo {
    MemberInfo {
        id: UserId::new(id),
        username: username.to_string(),
        tag: tag.to_string(),
        avatar_url: format!("https://cdn.discordapp.com/avatars/{id}/{username}.png"),
    }
}

#[async_trait]
impl MemberDirectory for MockPlatform {
    async fn fetch_member(&self, _guild_id: GuildId, id: &str) -> MelodyResult<MemberInfo> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let user_id = parse_user_id(id).ok_or_else(|| MelodyError::MemberNotFound(id.to_string()))?;
        self.members
            .iter()
            .find(|member| member.id == user_id)
            .cloned()
            .ok_or_else(|| MelodyError::MemberNotFound(id.to_string()))
    }

    fn cached_members(&self, _guild_id: GuildId) -> Vec<MemberInfo> {
        self.members.clone()
    }
}

#[async_trait]
impl ReplySink for MockPlatform {
    async fn send_reply(&self, reply: RichReply) -> MelodyResult<()> {
        self.sent.lock().unwrap().push(reply);
        Ok(())
    }
}

#[async_trait]
impl ChannelGate for MockPlatform {
    async fn author_permissions(&self) -> MelodyResult<Permissions> {
        Ok(self.permissions)
    }

    async fn is_nsfw_channel(&self) -> bool {
        self.nsfw
    }
}
