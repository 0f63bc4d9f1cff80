//! Shared protocol types for the QuestForge web client.
//!
//! Every JSON shape exchanged with the backend API lives here, together with
//! the small amount of pure domain logic the client applies to them (reward
//! merging, completion records, leaderboard sort keys). The backend is a
//! camelCase-emitting HTTP API, so every DTO carries a `rename_all`.

mod account;
mod character;
mod leaderboard;
mod quest;

pub use account::*;
pub use character::*;
pub use leaderboard::*;
pub use quest::*;

// =========================================================
// Constants
// =========================================================

/// Default backend API root used when no override is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5233/api";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_SCHEME: &str = "Bearer";
