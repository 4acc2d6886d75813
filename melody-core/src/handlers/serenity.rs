use crate::commands::DispatchRequest;
use crate::platform::SerenityPlatform;
use crate::{Data, Error};
use colored::Colorize;
use melody_types::messaging::messages::CONNECTED;
use poise::serenity_prelude::{Context as SerenityContext, FullEvent, Message};

/// Gateway events the bot reacts to. Everything else is ignored.
pub async fn handle_event(
    ctx: &SerenityContext,
    event: &FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            tracing::info!("{} {}", data_about_bot.user.name, CONNECTED);
            Ok(())
        },
        FullEvent::CacheReady { guilds } => {
            tracing::info!(
                "Cache built successfully! {} guilds cached",
                guilds.len().to_string().purple()
            );
            Ok(())
        },
        FullEvent::Message { new_message } => handle_message(ctx, new_message, data).await,
        _ => {
            tracing::trace!("Ignoring {}", event.snake_case_name());
            Ok(())
        },
    }
}

/// Run the command in `msg`, if there is one.
pub async fn handle_message(
    ctx: &SerenityContext,
    msg: &Message,
    data: &Data,
) -> Result<(), Error> {
    if msg.author.bot {
        return Ok(());
    }

    let prefix = data.bot_settings.get_prefix();
    let platform = SerenityPlatform::new(ctx, msg, &data.bot);
    let request = DispatchRequest {
        prefix: &prefix,
        content: &msg.content,
        guild_id: msg.guild_id,
        platform: &platform,
        locale: &data.locale,
        playlists: &data.playlists,
    };

    match data.registry.dispatch(request).await? {
        Some(status) => tracing::debug!("{} -> {}", msg.author.name, status),
        None => tracing::trace!("Not a command: {}", msg.id),
    }
    Ok(())
}
