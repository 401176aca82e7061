//! Discord front-end for the stats API.
//!
//! The binary in `main.rs` wires these modules into a poise framework;
//! the library split keeps configuration and asset lookup testable.

pub mod assets;
pub mod commands;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod reply;
pub mod state;
