//! Domain layer of the pitwall stats bot.
//!
//! Parses stats API XML, normalizes it into records, aggregates the
//! hotlap board and renders platform-neutral embeds. Performs no I/O.

pub mod embed;
pub mod error;
pub mod format;
pub mod help;
pub mod hotlap;
pub mod models;
pub mod render;
pub mod types;
pub mod xml;
