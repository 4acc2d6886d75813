use lazy_static::lazy_static;
use melody_types::MelodyResult;
use regex::Regex;
use serenity::all::Permissions;

lazy_static! {
    static ref MENTION_DECORATIONS: Regex = Regex::new(r"[\\<>@#&!]").unwrap();
}

/// Display labels for platform permissions, in the order they are listed.
const PERMISSION_LABELS: [(Permissions, &str); 28] = [
    (Permissions::ADMINISTRATOR, "Administrator"),
    (Permissions::CREATE_INSTANT_INVITE, "Create Instant Invite"),
    (Permissions::KICK_MEMBERS, "Kick Members"),
    (Permissions::BAN_MEMBERS, "Ban Members"),
    (Permissions::MANAGE_CHANNELS, "Manage Channels"),
    (Permissions::MANAGE_GUILD, "Manage Server"),
    (Permissions::ADD_REACTIONS, "Add Reactions"),
    (Permissions::VIEW_AUDIT_LOG, "View Audit Log"),
    (Permissions::VIEW_CHANNEL, "View Channel"),
    (Permissions::SEND_MESSAGES, "Send Messages"),
    (Permissions::SEND_TTS_MESSAGES, "Send Text-to-Speech Messages"),
    (Permissions::MANAGE_MESSAGES, "Manage Messages"),
    (Permissions::EMBED_LINKS, "Embed Links"),
    (Permissions::ATTACH_FILES, "Attach Files"),
    (Permissions::READ_MESSAGE_HISTORY, "Read Message History"),
    (Permissions::MENTION_EVERYONE, "Mention Everyone"),
    (Permissions::USE_EXTERNAL_EMOJIS, "Use External Emojis"),
    (Permissions::CONNECT, "Connect"),
    (Permissions::SPEAK, "Speak"),
    (Permissions::MUTE_MEMBERS, "Mute Members"),
    (Permissions::DEAFEN_MEMBERS, "Deafen Members"),
    (Permissions::MOVE_MEMBERS, "Move Members"),
    (Permissions::USE_VAD, "Use Voice Activation Detection"),
    (Permissions::CHANGE_NICKNAME, "Change Nickname"),
    (Permissions::MANAGE_NICKNAMES, "Manage Other Nicknames"),
    (Permissions::MANAGE_ROLES, "Manage Roles"),
    (Permissions::MANAGE_WEBHOOKS, "Manage Webhooks"),
    (Permissions::MANAGE_GUILD_EXPRESSIONS, "Manage Emojis"),
];

/// Strip mention decorations (`\ < > @ # & !`) from a user supplied token,
/// so `<@!1234>` becomes `1234`.
pub fn strip_mention_decorations(token: &str) -> String {
    MENTION_DECORATIONS.replace_all(token, "").into_owned()
}

/// Human readable list of permissions.
///
/// Raw output joins the labels with `+`, otherwise every label is wrapped
/// in backticks and separated by a space.
pub fn permissions_string(permissions: Permissions, raw: bool) -> String {
    let labels = PERMISSION_LABELS
        .iter()
        .filter(|(permission, _)| permissions.contains(*permission))
        .map(|(_, label)| *label);
    if raw {
        labels.collect::<Vec<_>>().join("+")
    } else {
        labels
            .map(|label| format!("`{}`", label))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Checks a Result and logs the error if it's an Err.
pub fn check_result<T>(result: MelodyResult<T>) {
    if let Err(why) = result {
        tracing::error!("Error: {}", why);
    }
}
