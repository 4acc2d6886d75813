use crate::commands::CommandRegistry;
use crate::locale::{Locale, DEFAULT_LOCALE};
use crate::messaging::BotIdentity;
use crate::playlist::PlaylistStore;
use melody_types::MelodyResult;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

pub mod commands;
pub mod config;
pub mod handlers;
pub mod locale;
pub mod messaging;
pub mod platform;
pub mod playlist;
pub mod utils;

#[cfg(test)]
pub mod test;

pub use melody_types::{Error, MelodyError};
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub const DEFAULT_PREFIX: &str = "m!";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct BotCredentials {
    pub discord_token: String,
}

#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct BotConfig {
    pub prefix: Option<String>,
    /// Link on the author line of every reply.
    pub home_url: Option<String>,
    pub locale: Option<String>,
    /// JSON locale bundle to use instead of the embedded one.
    pub locale_path: Option<PathBuf>,
    pub owners: Option<Vec<u64>>,
    /// Also write DEBUG level logs to this file.
    pub log_file: Option<PathBuf>,
    #[serde(skip_serializing)]
    pub credentials: Option<BotCredentials>,
}

impl Display for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut result = String::new();
        result.push_str(&format!("prefix: {}\n", self.get_prefix()));
        result.push_str(&format!("home_url: {:?}\n", self.home_url));
        result.push_str(&format!("locale: {}\n", self.get_locale()));
        result.push_str(&format!("locale_path: {:?}\n", self.locale_path));
        result.push_str(&format!("owners: {:?}\n", self.owners));
        result.push_str(&format!("log_file: {:?}", self.log_file));
        write!(f, "{}", result)
    }
}

impl BotConfig {
    pub fn set_credentials(&mut self, creds: BotCredentials) -> &mut Self {
        self.credentials = Some(creds);
        self
    }

    pub fn get_prefix(&self) -> String {
        self.prefix
            .as_ref()
            .cloned()
            .unwrap_or(DEFAULT_PREFIX.to_string())
    }

    pub fn get_locale(&self) -> String {
        self.locale
            .as_ref()
            .cloned()
            .unwrap_or(DEFAULT_LOCALE.to_string())
    }

    /// Load the locale bundle this config asks for.
    pub fn load_locale(&self) -> MelodyResult<Locale> {
        if self.locale_path.is_none() && self.get_locale() != DEFAULT_LOCALE {
            tracing::warn!(
                "No bundle for locale {}, using {}",
                self.get_locale(),
                DEFAULT_LOCALE
            );
        }
        Locale::load(self.locale_path.as_deref())
    }
}

/// User data, which is stored and accessible in all command invocations
#[derive(Debug)]
pub struct DataInner {
    pub bot_settings: BotConfig,
    pub bot: BotIdentity,
    pub locale: Locale,
    pub playlists: PlaylistStore,
    pub registry: CommandRegistry,
}

impl DataInner {
    pub fn new(bot_settings: BotConfig, bot: BotIdentity) -> MelodyResult<Self> {
        let locale = bot_settings.load_locale()?;
        Ok(Self {
            bot_settings,
            bot,
            locale,
            playlists: PlaylistStore::new(),
            registry: commands::default_registry()?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Data(pub Arc<DataInner>);

impl std::ops::Deref for Data {
    type Target = DataInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DataInner> for Data {
    fn from(inner: DataInner) -> Self {
        Self(Arc::new(inner))
    }
}

#[cfg(test)]
mod test_config {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BotConfig::default();
        assert_eq!(config.get_prefix(), DEFAULT_PREFIX);
        assert_eq!(config.get_locale(), DEFAULT_LOCALE);
        assert!(config.load_locale().is_ok());
    }

    #[test]
    fn test_load_locale_from_path() {
        let path = std::env::temp_dir().join(format!("melody-config-{}.json", std::process::id()));
        let json = include_str!("../locales/en.json")
            .replace("\"title\": \"Now Playing\"", "\"title\": \"En cours\"");
        std::fs::write(&path, json).unwrap();

        let config = BotConfig {
            locale: Some("fr".to_string()),
            locale_path: Some(path.clone()),
            ..Default::default()
        };
        let locale = config.load_locale().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(locale.command("voice", "nowplaying").unwrap().title, "En cours");
    }
}
