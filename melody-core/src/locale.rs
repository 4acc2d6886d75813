//! Locale bundles: nested text templates keyed by category and command name.
use lazy_static::lazy_static;
use melody_types::{MelodyError, MelodyResult};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_LOCALE: &str = "en";
const EMBEDDED_EN: &str = include_str!("../locales/en.json");

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{(\d+)\}").unwrap();
}

/// Templates used to render a command's usage line.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommandLayout {
    pub required_args: String,
    pub optional_args: String,
    pub command: String,
    pub divider: String,
    pub content: String,
}

/// User facing text for a single command. Commands only fill in the fields they use.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandText {
    pub title: String,
    pub description: String,
    pub success: String,
    pub no_playing: String,
    pub content: String,
    pub no_songs: String,
    pub no_permissions: String,
    pub category: String,
    pub errors: HashMap<String, String>,
}

impl CommandText {
    /// Look up an entry of the `errors` block, empty when missing.
    pub fn error(&self, key: &str) -> &str {
        self.errors.get(key).map(String::as_str).unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    pub command_layout: CommandLayout,
    #[serde(flatten)]
    pub categories: HashMap<String, HashMap<String, CommandText>>,
}

impl Locale {
    /// Parse a locale bundle from JSON.
    pub fn from_json(json: &str) -> MelodyResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// The English bundle compiled into the binary.
    pub fn embedded() -> MelodyResult<Self> {
        Self::from_json(EMBEDDED_EN)
    }

    /// Load the bundle at `path`, or the embedded one when no path is given.
    pub fn load(path: Option<&Path>) -> MelodyResult<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading locale from {}", path.display());
                let json = std::fs::read_to_string(path)?;
                Self::from_json(&json)
            },
            None => Self::embedded(),
        }
    }

    /// Get the text block for `category`/`name`.
    pub fn command(&self, category: &str, name: &str) -> MelodyResult<&CommandText> {
        self.categories
            .get(category)
            .and_then(|commands| commands.get(name))
            .ok_or_else(|| MelodyError::NoLocaleEntry(format!("{category}.{name}")))
    }
}

/// Substitute `{0}`, `{1}`, ... in `template` with the matching value.
///
/// Substitution is a single pass over the template: inserted values are
/// copied verbatim (a `$` or a `{n}` inside a value is never expanded), and
/// placeholders without a matching value are left untouched.
pub fn replace<S: AsRef<str>>(template: &str, values: &[S]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|idx| values.get(idx))
                .map(|value| value.as_ref().to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_replace_positional() {
        assert_eq!(replace("{0} and {1}", &["x", "y"]), "x and y");
        assert_eq!(replace("{1}{0}{1}", &["a", "b"]), "bab");
    }

    #[test]
    fn test_replace_keeps_dollar_verbatim() {
        assert_eq!(replace("cost: {0}", &["$5"]), "cost: $5");
        assert_eq!(replace("{0}", &["$1 $$ ${0}"]), "$1 $$ ${0}");
        assert_eq!(replace("{0}-{1}", &["$", "$ "]), "$-$ ");
    }

    #[test]
    fn test_replace_does_not_rescan_values() {
        assert_eq!(replace("{0} {1}", &["{1}", "y"]), "{1} y");
    }

    #[test]
    fn test_replace_missing_value() {
        assert_eq!(replace("{0} {1}", &["x"]), "x {1}");
        let none: [&str; 0] = [];
        assert_eq!(replace("plain", &none), "plain");
    }

    #[test]
    fn test_embedded_locale() {
        let locale = Locale::embedded().unwrap();
        assert_eq!(locale.command_layout.divider, "|");

        let avatar = locale.command("general", "avatar").unwrap();
        assert!(!avatar.title.is_empty());
        assert!(!avatar.error("noUser").is_empty());

        let np = locale.command("voice", "nowplaying").unwrap();
        assert!(!np.no_playing.is_empty());
        assert!(!np.no_songs.is_empty());
        assert!(np.content.contains("{3}"));
    }

    #[test]
    fn test_missing_locale_entry() {
        let locale = Locale::embedded().unwrap();
        let err = locale.command("voice", "nope").unwrap_err();
        assert_eq!(err, MelodyError::NoLocaleEntry("voice.nope".to_string()));
        assert_eq!(locale.command("general", "avatar").unwrap().error("nope"), "");
    }

    fn write_bundle(name: &str, title: &str) -> std::path::PathBuf {
        let json = EMBEDDED_EN.replace(
            "\"title\": \"Avatar\"",
            &format!("\"title\": \"{title}\""),
        );
        let path = std::env::temp_dir().join(format!("melody-{name}-{}.json", std::process::id()));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_load_bundle_from_file() {
        let path = write_bundle("locale-load", "Avatarul");
        let locale = Locale::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(locale.command("general", "avatar").unwrap().title, "Avatarul");
        assert_eq!(
            locale.command("voice", "nowplaying").unwrap().title,
            "Now Playing"
        );
    }

    #[test]
    fn test_load_invalid_bundle() {
        let path = write_bundle("locale-broken", "unused");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Locale::load(Some(path.as_path())).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, MelodyError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Locale::load(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, MelodyError::IO(_)));
    }
}
