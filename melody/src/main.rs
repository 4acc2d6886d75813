use config_file::FromConfigFile;
use melody_core::config::{poise_framework, spawn_shutdown_listener};
use melody_core::{BotConfig, BotCredentials, MelodyError};
use std::env;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{filter, prelude::*, EnvFilter, Registry};

type Error = Box<dyn std::error::Error + Send + Sync>;

const CONFIG_PATH: &str = "./melody.toml";

/// Main function, get everything kicked off.
#[cfg(not(tarpaulin_include))]
#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    let config = read_config_file(CONFIG_PATH);
    init_logging(config.as_ref().ok().and_then(|c| c.log_file.as_deref()))?;

    let config = load_bot_config(config)?;
    tracing::warn!("Using config:\n{}", config);

    let mut client = poise_framework(config).await?;
    spawn_shutdown_listener(&client);
    client.start().await?;

    Ok(())
}

/// Load an environment variable
fn load_key(k: &str) -> Result<String, Error> {
    match env::var(k) {
        Ok(token) => Ok(token),
        Err(_) => {
            tracing::warn!("{} not found in environment", k);
            Err(format!("{} not found in environment or .env", k).into())
        },
    }
}

fn read_config_file(path: &str) -> Result<BotConfig, MelodyError> {
    BotConfig::from_config_file(path).map_err(|err| MelodyError::Config(err.to_string()))
}

/// Load the bot's config, falling back to the defaults when the file is unusable.
fn load_bot_config(config: Result<BotConfig, MelodyError>) -> Result<BotConfig, Error> {
    let discord_token = load_key("DISCORD_TOKEN").map_err(|_| MelodyError::NoCredentials)?;

    let mut config = match config {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Using default config: {}", error);
            BotConfig::default()
        },
    };
    config.set_credentials(BotCredentials { discord_token });
    Ok(config)
}

fn combine_log_layers(
    stdout_log: impl tracing_subscriber::Layer<Registry>,
    debug_log: impl tracing_subscriber::Layer<Registry>,
) -> impl tracing_subscriber::Layer<Registry> {
    stdout_log
        .with_filter(filter::LevelFilter::INFO)
        .and_then(debug_log)
        .with_filter(filter::LevelFilter::DEBUG)
}

fn get_debug_log(path: &Path) -> Result<impl tracing_subscriber::Layer<Registry>, Error> {
    let debug_file = std::fs::File::create(path)?;
    Ok(tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(debug_file)))
}

/// Stdout at INFO, plus a DEBUG file layer when `log_file` is set.
fn get_current_log_layer(
    log_file: Option<&Path>,
) -> Result<Box<dyn tracing_subscriber::Layer<Registry> + Send + Sync>, Error> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();
    Ok(match log_file {
        Some(path) => combine_log_layers(stdout_log, get_debug_log(path)?).boxed(),
        None => stdout_log.with_filter(filter::LevelFilter::INFO).boxed(),
    })
}

/// Initialize logging and tracing.
fn init_logging(log_file: Option<&Path>) -> Result<(), Error> {
    let level_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("INFO"));

    Registry::default()
        .with(get_current_log_layer(log_file)?)
        .with(level_filter_layer)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_current_log_layer() {
        let _layer = get_current_log_layer(None).unwrap();
    }

    #[test]
    fn test_combine_log_layers() {
        let path = env::temp_dir().join("melody-test-debug.log");
        let stdout_log = tracing_subscriber::fmt::layer().pretty();
        let debug_log = get_debug_log(&path).unwrap();
        let _layer = combine_log_layers(stdout_log, debug_log);
    }

    #[test]
    fn test_load_key_missing() {
        assert!(load_key("MELODY_TEST_SURELY_UNSET_KEY").is_err());
    }

    #[test]
    fn test_read_config_file_missing() {
        let err = read_config_file("./does-not-exist.toml").unwrap_err();
        assert_eq!(err, MelodyError::Config(String::new()));
    }

    #[test]
    fn test_load_bot_config_falls_back_to_default() {
        env::set_var("DISCORD_TOKEN", "token");
        let config = load_bot_config(Err(MelodyError::Config("missing".into()))).unwrap();
        assert_eq!(config.get_prefix(), "m!");
        assert_eq!(
            config.credentials.map(|c| c.discord_token),
            Some("token".to_string())
        );
    }
}
