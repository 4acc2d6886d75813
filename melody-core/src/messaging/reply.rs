//! Contains the reply payload commands produce, and how it is rendered into
//! an embed for the user.
use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CurrentUser, Timestamp};

pub const COLOR_DEFAULT: u32 = 0xffffff;
pub const COLOR_AVATAR: u32 = 0x0dffe6;
pub const COLOR_FAILURE: u32 = 0xff0000;
pub const COLOR_HELP: u32 = 0x7289da;
pub const COLOR_NOW_PLAYING: u32 = 0xffcd2b;

/// Who the bot is, used for the author line and footer of every reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotIdentity {
    pub username: String,
    pub avatar_url: String,
    pub home_url: Option<String>,
}

impl BotIdentity {
    pub fn new(username: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            avatar_url: avatar_url.into(),
            home_url: None,
        }
    }

    pub fn with_home_url(mut self, home_url: Option<String>) -> Self {
        self.home_url = home_url;
        self
    }

    pub fn from_current_user(user: &CurrentUser, home_url: Option<String>) -> Self {
        Self::new(user.name.clone(), user.face()).with_home_url(home_url)
    }
}

/// A structured reply: color, title, description and an optional image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichReply {
    pub color: u32,
    pub title: Option<String>,
    pub description: String,
    pub image: Option<String>,
}

impl RichReply {
    pub fn new(color: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        let title: String = title.into();
        Self {
            color,
            title: (!title.is_empty()).then_some(title),
            description: description.into(),
            image: None,
        }
    }

    /// A failure-styled reply.
    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(COLOR_FAILURE, title, description)
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn is_failure(&self) -> bool {
        self.color == COLOR_FAILURE
    }

    /// Render this reply as an embed. The author line is the title, or the
    /// bot's name when there is none, linking to the home page.
    pub fn to_embed(&self, bot: &BotIdentity) -> CreateEmbed {
        let color = if self.color == 0 {
            COLOR_DEFAULT
        } else {
            self.color
        };
        let name = self.title.clone().unwrap_or_else(|| bot.username.clone());
        let mut author = CreateEmbedAuthor::new(name).icon_url(bot.avatar_url.clone());
        if let Some(home_url) = &bot.home_url {
            author = author.url(home_url.clone());
        }
        let embed = CreateEmbed::new()
            .color(color)
            .author(author)
            .description(self.description.clone())
            .footer(CreateEmbedFooter::new(bot.username.clone()).icon_url(bot.avatar_url.clone()))
            .timestamp(Timestamp::now());
        match &self.image {
            Some(image) => embed.image(image.clone()),
            None => embed,
        }
    }
}
