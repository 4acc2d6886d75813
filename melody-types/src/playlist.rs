use crate::messaging::messages::{
    LOOP_MODE_NONE, LOOP_MODE_QUEUE, LOOP_MODE_SONG, STATUS_OFF, STATUS_PAUSED, STATUS_PLAYING,
};
use serde::{Deserialize, Serialize};
use serenity::all::GuildId;
use std::fmt::{self, Display};
use std::time::Duration;

/// How the player treats the head of the queue once it finishes.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoopMode {
    #[default]
    None,
    Song,
    Queue,
}

impl Display for LoopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => LOOP_MODE_NONE,
            Self::Song => LOOP_MODE_SONG,
            Self::Queue => LOOP_MODE_QUEUE,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerStatus {
    #[default]
    Off,
    Playing,
    Paused,
}

impl Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => STATUS_OFF,
            Self::Playing => STATUS_PLAYING,
            Self::Paused => STATUS_PAUSED,
        })
    }
}

/// A queued song. The duration is kept pre-formatted for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub duration: String,
}

impl Song {
    pub fn new(title: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration: duration.into(),
        }
    }

    /// Build a song from a raw duration, formatted as `mm:ss` or `hh:mm:ss`.
    pub fn from_duration(title: impl Into<String>, duration: Duration) -> Self {
        Self::new(title, format_duration(duration))
    }
}

/// Format a duration as `mm:ss`, or `hh:mm:ss` once it reaches an hour.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Playback state of one guild's player.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub loop_mode: LoopMode,
    pub status: PlayerStatus,
    /// Index 0 is the song currently playing, the rest are queued.
    pub songs: Vec<Song>,
    pub select_list: Vec<Song>,
}

/// Per guild playlist, one per guild for the lifetime of the process.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlaylistState {
    pub guild_id: GuildId,
    pub player: PlayerState,
}

impl PlaylistState {
    pub fn new(guild_id: GuildId) -> Self {
        Self {
            guild_id,
            player: PlayerState::default(),
        }
    }

    /// The song currently playing, if any.
    pub fn current(&self) -> Option<&Song> {
        self.player.songs.first()
    }

    /// Songs waiting behind the current one.
    pub fn queued(&self) -> &[Song] {
        self.player.songs.get(1..).unwrap_or_default()
    }

    pub fn enqueue(&mut self, song: Song) {
        self.player.songs.push(song);
        if self.player.status == PlayerStatus::Off {
            self.player.status = PlayerStatus::Playing;
        }
    }

    /// Move past the current song according to the loop mode and return the
    /// song now at the head of the queue.
    pub fn advance(&mut self) -> Option<&Song> {
        if self.player.songs.is_empty() {
            return None;
        }
        match self.player.loop_mode {
            LoopMode::None => {
                self.player.songs.remove(0);
            },
            LoopMode::Song => {},
            LoopMode::Queue => self.player.songs.rotate_left(1),
        }
        if self.player.songs.is_empty() {
            self.player.status = PlayerStatus::Off;
        }
        self.current()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn abc(guild_id: u64) -> PlaylistState {
        let mut playlist = PlaylistState::new(GuildId::new(guild_id));
        playlist.enqueue(Song::new("A", "1:00"));
        playlist.enqueue(Song::new("B", "2:00"));
        playlist.enqueue(Song::new("C", "3:00"));
        playlist
    }

    #[test]
    fn test_new_playlist_defaults() {
        let playlist = PlaylistState::new(GuildId::new(1));
        assert_eq!(playlist.player.status, PlayerStatus::Off);
        assert_eq!(playlist.player.loop_mode, LoopMode::None);
        assert!(playlist.player.songs.is_empty());
        assert!(playlist.player.select_list.is_empty());
        assert!(playlist.current().is_none());
        assert!(playlist.queued().is_empty());
    }

    #[test]
    fn test_enqueue_starts_playing() {
        let playlist = abc(1);
        assert_eq!(playlist.player.status, PlayerStatus::Playing);
        assert_eq!(playlist.current().map(|s| s.title.as_str()), Some("A"));
        let queued: Vec<&str> = playlist.queued().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(queued, vec!["B", "C"]);
    }

    #[test]
    fn test_advance_no_loop() {
        let mut playlist = abc(1);
        assert_eq!(playlist.advance().map(|s| s.title.clone()), Some("B".into()));
        assert_eq!(playlist.advance().map(|s| s.title.clone()), Some("C".into()));
        assert_eq!(playlist.advance(), None);
        assert_eq!(playlist.player.status, PlayerStatus::Off);
        assert_eq!(playlist.advance(), None);
    }

    #[test]
    fn test_advance_loop_song() {
        let mut playlist = abc(1);
        playlist.player.loop_mode = LoopMode::Song;
        assert_eq!(playlist.advance().map(|s| s.title.clone()), Some("A".into()));
        assert_eq!(playlist.player.songs.len(), 3);
    }

    #[test]
    fn test_advance_loop_queue() {
        let mut playlist = abc(1);
        playlist.player.loop_mode = LoopMode::Queue;
        assert_eq!(playlist.advance().map(|s| s.title.clone()), Some("B".into()));
        let titles: Vec<&str> = playlist
            .player
            .songs
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(59)), "00:59");
        assert_eq!(format_duration(Duration::from_secs(3661)), "01:01:01");
        assert_eq!(
            Song::from_duration("A", Duration::from_secs(60)).duration,
            "01:00"
        );
    }

    #[test]
    fn test_enum_display_and_serde() {
        assert_eq!(LoopMode::None.to_string(), "NONE");
        assert_eq!(LoopMode::Queue.to_string(), "QUEUE");
        assert_eq!(PlayerStatus::Paused.to_string(), "PAUSED");
        let json = serde_json::to_string(&LoopMode::Song).unwrap();
        assert_eq!(json, "\"SONG\"");
    }
}
