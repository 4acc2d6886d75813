// ------------------------------------------------------------------
// Public types we use to simplify return and parameter types.
// ------------------------------------------------------------------
use std::error::Error as StdError;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod errors;
pub mod messaging;
pub mod playlist;

pub type Error = Box<dyn StdError + Send + Sync>;
pub type ArcTRwLock<T> = Arc<RwLock<T>>;

// ------------------------------------------------------------------
// Public Re-exports
// ------------------------------------------------------------------
pub use errors::{MelodyError, MelodyResult};
pub use playlist::{LoopMode, PlayerState, PlayerStatus, PlaylistState, Song};
pub use serenity::all::{GuildId, Permissions, UserId};
