use crate::messaging::messages::{
    FAIL_DID_YOU_MEAN, FAIL_DUPLICATE_ALIAS, FAIL_MEMBER_NOT_FOUND, FAIL_MISSING_ARGUMENTS,
    FAIL_MISSING_PERMISSIONS, FAIL_NO_CREDENTIALS, FAIL_NO_LOCALE_ENTRY, FAIL_NSFW_ONLY,
    FAIL_TOO_MANY_ARGUMENTS, FAIL_UNKNOWN_COMMAND, GUILD_ONLY,
};
use crate::Error;
use serenity::Error as SerenityError;
use std::fmt::{self, Display};

/// A common error enum returned by most of the crate's functions within a [`Result`].
#[derive(Debug)]
pub enum MelodyError {
    Other(&'static str),
    NoGuildId,
    MemberNotFound(String),
    MissingArguments { usage: String },
    TooManyArguments { usage: String },
    NsfwOnly,
    MissingPermissions(String),
    UnknownCommand {
        alias: String,
        suggestion: Option<String>,
    },
    DuplicateAlias(String),
    NoLocaleEntry(String),
    NoCredentials,
    Config(String),
    Serenity(SerenityError),
    Json(serde_json::Error),
    IO(std::io::Error),
    Poise(Error),
}

pub type MelodyResult<T> = Result<T, MelodyError>;

/// `MelodyError` implements the [`Debug`] and [`Display`] traits
/// meaning it implements the [`std::error::Error`] trait.
/// This just makes it explicit.
impl std::error::Error for MelodyError {}

/// Implementation of the [`Display`] trait for the [`MelodyError`] enum.
/// Errors are formatted with this and then sent as responses to the channel.
impl Display for MelodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(msg) => f.write_str(msg),
            Self::NoGuildId => f.write_str(GUILD_ONLY),
            Self::MemberNotFound(name) => write!(f, "{} `{}`", FAIL_MEMBER_NOT_FOUND, name),
            Self::MissingArguments { usage } => write!(f, "{} {}", FAIL_MISSING_ARGUMENTS, usage),
            Self::TooManyArguments { usage } => write!(f, "{} {}", FAIL_TOO_MANY_ARGUMENTS, usage),
            Self::NsfwOnly => f.write_str(FAIL_NSFW_ONLY),
            Self::MissingPermissions(perms) => write!(f, "{} {}", FAIL_MISSING_PERMISSIONS, perms),
            Self::UnknownCommand { alias, suggestion } => match suggestion {
                Some(suggestion) => write!(
                    f,
                    "{} `{}`. {} `{}`?",
                    FAIL_UNKNOWN_COMMAND, alias, FAIL_DID_YOU_MEAN, suggestion
                ),
                None => write!(f, "{} `{}`.", FAIL_UNKNOWN_COMMAND, alias),
            },
            Self::DuplicateAlias(alias) => write!(f, "{} `{}`", FAIL_DUPLICATE_ALIAS, alias),
            Self::NoLocaleEntry(key) => write!(f, "{} `{}`", FAIL_NO_LOCALE_ENTRY, key),
            Self::NoCredentials => f.write_str(FAIL_NO_CREDENTIALS),
            Self::Config(err) => f.write_str(err),
            Self::Serenity(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::IO(err) => write!(f, "{err}"),
            Self::Poise(err) => write!(f, "{err}"),
        }
    }
}

/// Implementation of the [`PartialEq`] trait for the [`MelodyError`] enum.
/// For some enum variants, values are considered equal when their inner values
/// are equal and for others when they are of the same type.
impl PartialEq for MelodyError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Other(l0), Self::Other(r0)) => l0 == r0,
            (Self::MemberNotFound(l0), Self::MemberNotFound(r0)) => l0 == r0,
            (Self::MissingArguments { usage: l0 }, Self::MissingArguments { usage: r0 }) => {
                l0 == r0
            },
            (Self::TooManyArguments { usage: l0 }, Self::TooManyArguments { usage: r0 }) => {
                l0 == r0
            },
            (Self::MissingPermissions(l0), Self::MissingPermissions(r0)) => l0 == r0,
            (
                Self::UnknownCommand {
                    alias: l0,
                    suggestion: l1,
                },
                Self::UnknownCommand {
                    alias: r0,
                    suggestion: r1,
                },
            ) => l0 == r0 && l1 == r1,
            (Self::DuplicateAlias(l0), Self::DuplicateAlias(r0)) => l0 == r0,
            (Self::Serenity(l0), Self::Serenity(r0)) => format!("{l0:?}") == format!("{r0:?}"),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Provides an implementation to convert a [`SerenityError`] to a [`MelodyError`].
impl From<SerenityError> for MelodyError {
    fn from(err: SerenityError) -> Self {
        match err {
            SerenityError::Other(msg) => Self::Other(msg),
            _ => Self::Serenity(err),
        }
    }
}

/// Provides an implementation to convert a [`serde_json::Error`] to a [`MelodyError`].
impl From<serde_json::Error> for MelodyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Provides an implementation to convert a [`std::io::Error`] to a [`MelodyError`].
impl From<std::io::Error> for MelodyError {
    fn from(err: std::io::Error) -> Self {
        Self::IO(err)
    }
}

impl From<Error> for MelodyError {
    fn from(err: Error) -> Self {
        Self::Poise(err)
    }
}
