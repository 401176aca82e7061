//! Global slash-command error handler.

use std::time::Duration;

use poise::FrameworkError;

use crate::state::{Data, Error};

pub const PERMISSION_MESSAGE: &str = "You don't have permission to use this command.";

pub fn cooldown_message(remaining: Duration) -> String {
    format!(
        "This command is on cooldown. Try again in **{:.2}** seconds.",
        remaining.as_secs_f64()
    )
}

pub fn unexpected_error_message(error: &Error) -> String {
    format!("An unexpected error occurred: `{error}`")
}

/// Route framework errors to ephemeral replies; everything else goes to
/// poise's default handler.
pub async fn on_error(error: FrameworkError<'_, Data, Error>) {
    match error {
        FrameworkError::CooldownHit {
            remaining_cooldown,
            ctx,
            ..
        } => {
            tracing::debug!(
                command = %ctx.command().qualified_name,
                user = %ctx.author().name,
                remaining_secs = remaining_cooldown.as_secs_f64(),
                "Cooldown hit"
            );
            reply_ephemeral(ctx, cooldown_message(remaining_cooldown)).await;
        }
        FrameworkError::MissingUserPermissions { ctx, .. } => {
            reply_ephemeral(ctx, PERMISSION_MESSAGE.to_string()).await;
        }
        FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(
                command = %ctx.command().qualified_name,
                error = %error,
                "Command failed"
            );
            reply_ephemeral(ctx, unexpected_error_message(&error)).await;
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!(error = %e, "Error while handling error");
            }
        }
    }
}

// ---- private helpers ----

async fn reply_ephemeral(ctx: poise::Context<'_, Data, Error>, message: String) {
    let reply = poise::CreateReply::default().content(message).ephemeral(true);
    if let Err(e) = ctx.send(reply).await {
        tracing::warn!(error = %e, "Failed to send error reply");
    }
}
