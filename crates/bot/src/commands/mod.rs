//! Slash commands.

use crate::state::{Data, Error};

pub mod creations;
pub mod help;
pub mod hotlap;
pub mod leaderboard;
pub mod player;
pub mod stats;

/// Every command, in help-menu order.
pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        hotlap::hotlap(),
        leaderboard::leaderboard(),
        player::player(),
        creations::topmods(),
        creations::topkarts(),
        creations::toptracks(),
        stats::stats(),
        help::help(),
    ]
}
