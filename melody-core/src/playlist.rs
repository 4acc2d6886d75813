use dashmap::DashMap;
use melody_types::{ArcTRwLock, GuildId, PlaylistState};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process wide playlist state, one record per guild, created on first use.
///
/// Records are never replaced once created: every caller asking for the same
/// guild gets a handle to the same record. Nothing here is persisted.
#[derive(Clone, Debug, Default)]
pub struct PlaylistStore(Arc<DashMap<GuildId, ArcTRwLock<PlaylistState>>>);

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the playlist for `guild_id`, creating an empty one if it doesn't exist.
    pub fn get_or_create(&self, guild_id: GuildId) -> ArcTRwLock<PlaylistState> {
        self.0
            .entry(guild_id)
            .or_insert_with(|| {
                tracing::debug!("Creating playlist for guild {}", guild_id);
                Arc::new(RwLock::new(PlaylistState::new(guild_id)))
            })
            .value()
            .clone()
    }

    /// Get the playlist for `guild_id` without creating it.
    pub fn get(&self, guild_id: GuildId) -> Option<ArcTRwLock<PlaylistState>> {
        self.0.get(&guild_id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use melody_types::{LoopMode, PlayerStatus, Song};

    #[tokio::test]
    async fn test_get_or_create_defaults() {
        let store = PlaylistStore::new();
        assert!(store.get(GuildId::new(1)).is_none());

        let playlist = store.get_or_create(GuildId::new(1));
        let playlist = playlist.read().await;
        assert_eq!(playlist.guild_id, GuildId::new(1));
        assert_eq!(playlist.player.status, PlayerStatus::Off);
        assert_eq!(playlist.player.loop_mode, LoopMode::None);
        assert!(playlist.player.songs.is_empty());
        assert!(playlist.player.select_list.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_get_or_create_same_record() {
        let store = PlaylistStore::new();
        let first = store.get_or_create(GuildId::new(7));
        let second = store.get_or_create(GuildId::new(7));
        assert!(Arc::ptr_eq(&first, &second));

        first.write().await.enqueue(Song::new("A", "1:00"));
        let second = second.read().await;
        assert_eq!(second.current(), Some(&Song::new("A", "1:00")));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_store_clones_share_state() {
        let store = PlaylistStore::new();
        let cloned = store.clone();
        let a = store.get_or_create(GuildId::new(3));
        let b = cloned.get_or_create(GuildId::new(3));
        assert!(Arc::ptr_eq(&a, &b));

        let other = store.get_or_create(GuildId::new(4));
        assert!(!Arc::ptr_eq(&a, &other));
        assert_eq!(cloned.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_get_or_create() {
        let store = PlaylistStore::new();
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.get_or_create(GuildId::new(9)) })
            })
            .collect();
        let first = store.get_or_create(GuildId::new(9));
        for handle in handles {
            assert!(Arc::ptr_eq(&first, &handle.await.unwrap()));
        }
        assert_eq!(store.len(), 1);
    }
}
