use crate::messaging::BotIdentity;
use crate::{handlers::handle_event, BotConfig, Data, DataInner, Error};
use colored::Colorize;
use melody_types::MelodyError;
use poise::serenity_prelude::{Client, FullEvent, GatewayIntents, UserId};

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::EventHandler { error, event, .. } => match event {
            FullEvent::PresenceUpdate { .. } => {},
            _ => {
                tracing::warn!(
                    "{} {} {} {}",
                    "In event handler for ".yellow(),
                    event.snake_case_name().yellow().italic(),
                    " event: ".yellow(),
                    error.to_string().yellow().bold(),
                );
            },
        },
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("{} {}", "Failed to start the bot:".red(), error);
        },
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        },
    }
}

/// Gateway intents the bot needs to read commands and look members up.
pub fn intents() -> GatewayIntents {
    GatewayIntents::non_privileged()
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Build the client. Commands are dispatched from the message events, so the
/// framework itself carries no poise commands.
pub async fn poise_framework(config: BotConfig) -> Result<Client, Error> {
    let token = config
        .credentials
        .as_ref()
        .ok_or(MelodyError::NoCredentials)?
        .discord_token
        .clone();

    tracing::warn!("Commands: {:#?}", crate::commands::all_command_names());

    let options = poise::FrameworkOptions::<Data, Error> {
        commands: vec![],
        owners: config
            .owners
            .as_ref()
            .map(|owners| owners.iter().map(|id| UserId::new(*id)).collect())
            .unwrap_or_default(),
        on_error: |error| Box::pin(on_error(error)),
        event_handler: |ctx, event, framework, data| {
            Box::pin(handle_event(ctx, event, framework, data))
        },
        initialize_owners: true,
        ..Default::default()
    };

    let framework = poise::Framework::builder()
        .options(options)
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                let bot = BotIdentity::from_current_user(&ready.user, config.home_url.clone());
                tracing::info!("Logged in as {}", bot.username);
                let data = DataInner::new(config, bot)?;
                Ok(Data::from(data))
            })
        })
        .build();

    let client = Client::builder(token, intents())
        .framework(framework)
        .await?;
    Ok(client)
}

/// Shut every shard down on Ctrl-C.
pub fn spawn_shutdown_listener(client: &Client) {
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Could not listen for Ctrl-C: {}", err);
            return;
        }
        tracing::warn!("Received Ctrl-C, shutting down...");
        shard_manager.shutdown_all().await;
    });
}
