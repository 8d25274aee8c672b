//! # top-player
//!
//! A player entity for turn-based dice games.
//!
//! ## Design Principles
//!
//! 1. **One entity, explicit collaborators**: the crate models a single
//!    `Player`; the hosting environment supplies an [`AttributeStore`] and
//!    an [`EventSink`], both passed into the operations that need them.
//!
//! 2. **Attributes mirror state**: after any mutation the host's attribute
//!    representation (`color`, `name`, `score`, `has-turn`) matches the
//!    player's internal fields.
//!
//! 3. **Coordination stays outside**: `start_turn` announces itself through
//!    the sink; whether another player must yield is the caller's business.
//!
//! ## Architecture
//!
//! - Construction merges explicit [`PlayerConfig`] values with attributes
//!   already declared on the host; explicit wins, attribute second, default
//!   last. Missing identity fields fail with [`ConfigurationError`].
//!
//! - The turn machine has two states ([`TurnState`]); starting a turn
//!   dispatches [`START_TURN_EVENT`] before the state flips, so listeners
//!   observe the pre-transition state.
//!
//! ## Modules
//!
//! - `attributes`: the `AttributeStore` seam, attribute names, in-memory store
//! - `config`: `PlayerConfig` and two-source field resolution
//! - `error`: `ConfigurationError`
//! - `events`: the `EventSink` seam and the turn-start event
//! - `player`: the `Player` entity and its turn state machine

pub mod attributes;
pub mod config;
pub mod error;
pub mod events;
pub mod player;

// Re-export commonly used types
pub use crate::attributes::{
    AttributeStore, MemoryAttributes, COLOR_ATTRIBUTE, HAS_TURN_ATTRIBUTE, NAME_ATTRIBUTE,
    SCORE_ATTRIBUTE,
};
pub use crate::config::PlayerConfig;
pub use crate::error::ConfigurationError;
pub use crate::events::{EventSink, NullSink, START_TURN_EVENT};
pub use crate::player::{Player, TurnState};
