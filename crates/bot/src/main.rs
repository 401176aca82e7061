use std::process::ExitCode;

use poise::serenity_prelude as serenity;

use pitwall_bot::config::BotConfig;
use pitwall_bot::state::{Data, Error};
use pitwall_bot::{commands, errors, events, logging};
use pitwall_client::StatsApi;

const INVALID_TOKEN_MESSAGE: &str =
    "The provided token is invalid. Please verify your token and try again.";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // The subscriber depends on config, so this goes straight to stderr.
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // --- Tracing ---
    logging::init_tracing(config.debug_mode, config.log_format);
    tracing::info!(
        api = %config.stats_api_url,
        debug = config.debug_mode,
        "Loaded bot configuration"
    );

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<serenity::Error>() {
                Some(serenity::Error::Gateway(serenity::GatewayError::InvalidAuthentication)) => {
                    tracing::error!("{INVALID_TOKEN_MESSAGE}");
                }
                _ => tracing::error!(error = %e, "An error occurred"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(config: BotConfig) -> Result<(), Error> {
    // --- Stats API client ---
    let api = StatsApi::http(
        &config.stats_api_url,
        config.http_timeout,
        &config.http_user_agent,
    )?;
    tracing::info!(base_url = %api.base_url(), "Stats API client ready");

    let token = config.discord_token.clone();
    let data = Data { config, api };

    // --- Framework ---
    let options = poise::FrameworkOptions {
        commands: commands::all(),
        on_error: |error| Box::pin(errors::on_error(error)),
        pre_command: |ctx| Box::pin(events::log_invocation(ctx)),
        event_handler: |ctx, event, framework, data| {
            Box::pin(events::event_handler(ctx, event, framework, data))
        },
        ..Default::default()
    };

    let framework = poise::Framework::builder()
        .options(options)
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                tracing::info!(
                    commands = framework.options().commands.len(),
                    "Registered slash commands"
                );
                Ok(data)
            })
        })
        .build();

    // --- Gateway ---
    let mut client = serenity::ClientBuilder::new(token, serenity::GatewayIntents::non_privileged())
        .framework(framework)
        .await?;

    tracing::info!("Connecting to Discord");
    client.start().await?;
    Ok(())
}
