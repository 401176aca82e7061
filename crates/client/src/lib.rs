//! Stats API client.
//!
//! Wraps the racing game's public XML statistics API (player lookups,
//! creation rankings and counts, leaderboards) behind typed async
//! methods on [`StatsApi`](api::StatsApi).

pub mod api;
pub mod error;
pub mod source;

pub use api::{HotlapBoard, StatsApi};
pub use error::ApiError;
pub use source::{HttpSource, XmlSource};
