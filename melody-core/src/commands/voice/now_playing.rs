use crate::commands::{CommandDescriptor, CommandFuture, CommandStatus, Invocation};
use crate::locale::{replace, CommandText};
use crate::messaging::reply::COLOR_NOW_PLAYING;
use crate::messaging::RichReply;
use crate::platform::ReplySink;
use crate::playlist::PlaylistStore;
use melody_types::{GuildId, MelodyError, MelodyResult, Permissions, PlaylistState, Song};

pub const STATUS_NOW_PLAYING: CommandStatus = "Returned now playing";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor {
        name: "now playing",
        category: "voice",
        locale_key: "nowplaying",
        aliases: vec!["np", "nowplaying", "q", "queue"],
        super_command: vec![],
        opt_args: vec![],
        req_args: vec![],
        unlimited_args: false,
        nsfw: false,
        permissions: Permissions::empty(),
        show_command: true,
        execute,
    }
}

/// Arguments of the now playing command.
pub struct NowPlayingArgs<'a> {
    pub guild_id: GuildId,
    pub playlists: &'a PlaylistStore,
    pub replies: &'a dyn ReplySink,
    pub text: &'a CommandText,
}

impl<'a> NowPlayingArgs<'a> {
    pub fn from_invocation(invocation: Invocation<'a>) -> MelodyResult<Self> {
        Ok(Self {
            guild_id: invocation.guild_id.ok_or(MelodyError::NoGuildId)?,
            playlists: invocation.playlists,
            replies: invocation.platform.replies(),
            text: invocation.locale.command("voice", "nowplaying")?,
        })
    }
}

fn execute(invocation: Invocation<'_>) -> CommandFuture<'_> {
    Box::pin(async move { now_playing(NowPlayingArgs::from_invocation(invocation)?).await })
}

/// Numbered list of the queued songs, or `placeholder` when nothing is queued.
pub fn queue_listing(queued: &[Song], placeholder: &str) -> String {
    if queued.is_empty() {
        return placeholder.to_string();
    }
    queued
        .iter()
        .enumerate()
        .map(|(idx, song)| {
            format!(
                "  **{}.**  -  ` {} `  {}\n",
                idx + 1,
                song.duration,
                song.title
            )
        })
        .collect()
}

/// Body of the now playing reply for `playlist`.
pub fn now_playing_description(playlist: &PlaylistState, text: &CommandText) -> String {
    match playlist.current() {
        None => text.no_playing.clone(),
        Some(current) => {
            let listing = queue_listing(playlist.queued(), &text.no_songs);
            let loop_mode = playlist.player.loop_mode.to_string();
            replace(
                &text.content,
                &[
                    current.title.as_str(),
                    current.duration.as_str(),
                    loop_mode.as_str(),
                    listing.as_str(),
                ],
            )
        },
    }
}

/// Show the current song of the guild and what's queued after it.
pub async fn now_playing(args: NowPlayingArgs<'_>) -> MelodyResult<CommandStatus> {
    let playlist = args.playlists.get_or_create(args.guild_id);
    let description = now_playing_description(&*playlist.read().await, args.text);

    let reply = RichReply::new(COLOR_NOW_PLAYING, &args.text.title, description);
    args.replies.send_reply(reply).await?;
    Ok(STATUS_NOW_PLAYING)
}
