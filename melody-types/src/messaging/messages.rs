pub const CONNECTED: &str = "is connected!";
pub const ERROR: &str = "Fatality! Something went wrong ☹️";
pub const FAIL_DID_YOU_MEAN: &str = "Did you mean";
pub const FAIL_DUPLICATE_ALIAS: &str = "⚠️ Two commands share the same alias!";
pub const FAIL_MEMBER_NOT_FOUND: &str = "⚠️ Could not find a user named";
pub const FAIL_MISSING_ARGUMENTS: &str = "⚠️ Missing required arguments! Usage:";
pub const FAIL_MISSING_PERMISSIONS: &str = "⚠️ You are missing the permissions:";
pub const FAIL_NO_CREDENTIALS: &str = "⚠️ DISCORD_TOKEN not found in environment!";
pub const FAIL_NO_LOCALE_ENTRY: &str = "⚠️ No locale text found for";
pub const FAIL_NSFW_ONLY: &str = "🔞 This command can only be used in an NSFW channel!";
pub const FAIL_TOO_MANY_ARGUMENTS: &str = "⚠️ Too many arguments! Usage:";
pub const FAIL_UNKNOWN_COMMAND: &str = "⚠️ Unknown command";
pub const GUILD_ONLY: &str = "⚠️ This command can only be used in a server!";

pub const LOOP_MODE_NONE: &str = "NONE";
pub const LOOP_MODE_SONG: &str = "SONG";
pub const LOOP_MODE_QUEUE: &str = "QUEUE";
pub const STATUS_OFF: &str = "OFF";
pub const STATUS_PLAYING: &str = "PLAYING";
pub const STATUS_PAUSED: &str = "PAUSED";
