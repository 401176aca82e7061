use chrono::Utc;
use pitwall_core::embed::EmbedView;
use pitwall_core::help::{help_embed, CommandInfo, ParamInfo};

use crate::reply::{bot_avatar, bot_name, requester, send_embed};
use crate::state::{Context, Data, Error};

/// Displays the help menu.
#[poise::command(slash_command)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "The command you want to get help with."] command: Option<String>,
) -> Result<(), Error> {
    let catalog = catalog(&ctx.framework().options().commands);

    let base = EmbedView::new(format!("Help for {}", bot_name(ctx)), ctx.data().config.embed_color)
        .timestamp(Utc::now())
        .thumbnail(bot_avatar(ctx))
        .footer(requester(ctx).footer());

    let view = help_embed(base, &catalog, command.as_deref());
    send_embed(ctx, &view).await
}

/// Describe the registered commands for the help menu.
pub fn catalog(commands: &[poise::Command<Data, Error>]) -> Vec<CommandInfo> {
    commands
        .iter()
        .filter(|command| !command.hide_in_help)
        .map(|command| CommandInfo {
            name: command.name.clone(),
            description: command.description.clone().unwrap_or_default(),
            category: command.category.clone(),
            params: command
                .parameters
                .iter()
                .map(|param| ParamInfo {
                    name: param.name.clone(),
                    description: param.description.clone().unwrap_or_default(),
                    required: param.required,
                })
                .collect(),
        })
        .collect()
}
