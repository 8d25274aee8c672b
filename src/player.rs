//! The player entity: identity, score, and turn state.
//!
//! A `Player` owns four fields: an immutable identity (`color`, `name`), an
//! optional `score`, and a two-state turn flag. Every mutation is mirrored
//! into the host's [`AttributeStore`] so the external representation always
//! reflects internal state.
//!
//! ## Identity
//!
//! A player's name and color should be unique in a game, and prose-wise the
//! two together form the identity. Equality, however, compares names only;
//! two players with equal names compare equal whatever their colors. Callers
//! relying on color-sensitive identity must compare colors themselves.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeStore, HAS_TURN_ATTRIBUTE, SCORE_ATTRIBUTE};
use crate::config::{resolve, PlayerConfig};
use crate::error::ConfigurationError;
use crate::events::{EventSink, START_TURN_EVENT};

/// Turn state of a player.
///
/// Two states only. Nothing here prevents several players from holding
/// `HasTurn` at once; exclusivity, when wanted, is enforced by an external
/// turn coordinator reacting to [`START_TURN_EVENT`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// The player does not hold the turn.
    #[default]
    NoTurn,
    /// The player holds the turn.
    HasTurn,
}

/// A player in a dice game.
///
/// Constructed once via [`Player::create`], which reconciles explicit
/// configuration against attributes already declared on the host. `score`
/// and the turn state mutate during play; `color` and `name` never do.
///
/// ## Example
///
/// ```
/// use top_player::{MemoryAttributes, NullSink, Player, PlayerConfig};
///
/// let mut store = MemoryAttributes::new();
/// let config = PlayerConfig::new().with_color("navy").with_name("Alice");
/// let mut player = Player::create(&config, &mut store).unwrap();
///
/// assert_eq!(player.score(), 0);
/// player.set_score(&mut store, Some(5));
/// assert_eq!(player.score(), 5);
///
/// player.start_turn(&mut store, &mut NullSink);
/// assert!(player.has_turn());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    color: String,
    name: String,
    score: Option<i64>,
    turn: TurnState,
}

impl Player {
    /// Create a new player from explicit configuration and the host's
    /// attribute store.
    ///
    /// Per field, an explicit value wins over a pre-existing attribute,
    /// which wins over the default; winning explicit values are written to
    /// the store. Fails with [`ConfigurationError`] when neither source
    /// supplies a non-empty `color` or `name`.
    pub fn create(
        config: &PlayerConfig,
        store: &mut dyn AttributeStore,
    ) -> Result<Self, ConfigurationError> {
        let resolved = resolve(config, store)?;
        Ok(Self {
            color: resolved.color,
            name: resolved.name,
            score: resolved.score,
            turn: resolved.turn,
        })
    }

    /// This player's color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// This player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This player's score. Reads as 0 while no score is set.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score.unwrap_or(0)
    }

    /// Set or clear the score, mirroring it into the attribute store.
    ///
    /// `None` clears: the score reads 0 again and the attribute is removed.
    /// The incoming value is not validated or clamped.
    pub fn set_score(&mut self, store: &mut dyn AttributeStore, score: Option<i64>) {
        self.score = score;
        match score {
            None => store.remove_attribute(SCORE_ATTRIBUTE),
            Some(value) => store.set_attribute(SCORE_ATTRIBUTE, &value.to_string()),
        }
        debug!("player {} score set to {score:?}", self.name);
    }

    /// Does this player hold the turn?
    #[must_use]
    pub fn has_turn(&self) -> bool {
        self.turn == TurnState::HasTurn
    }

    /// Current turn state.
    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Start a turn for this player.
    ///
    /// While the sink reports the player attached, dispatches
    /// [`START_TURN_EVENT`] into the enclosing scope *before* the state
    /// flips, so listeners observe the pre-transition [`Player::has_turn`].
    /// Then sets the state to [`TurnState::HasTurn`] and the `has-turn`
    /// attribute. Idempotent in state; a repeated call still re-dispatches
    /// and re-sets the attribute.
    pub fn start_turn(&mut self, store: &mut dyn AttributeStore, sink: &mut dyn EventSink) {
        if sink.is_attached() {
            sink.dispatch(START_TURN_EVENT, self);
        }
        self.turn = TurnState::HasTurn;
        store.set_attribute(HAS_TURN_ATTRIBUTE, "true");
        debug!("player {} starts a turn", self.name);
    }

    /// End a turn for this player.
    ///
    /// Sets the state to [`TurnState::NoTurn`] and removes the `has-turn`
    /// attribute. No event is emitted. Idempotent.
    pub fn end_turn(&mut self, store: &mut dyn AttributeStore) {
        self.turn = TurnState::NoTurn;
        store.remove_attribute(HAS_TURN_ATTRIBUTE);
        debug!("player {} ends a turn", self.name);
    }
}

/// A player's string form is its name.
impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Name-only equality; color is not consulted.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}

impl PartialEq<str> for Player {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Player {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl PartialEq<String> for Player {
    fn eq(&self, other: &String) -> bool {
        self.name == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::MemoryAttributes;
    use crate::events::NullSink;

    fn player(color: &str, name: &str, store: &mut MemoryAttributes) -> Player {
        let config = PlayerConfig::new().with_color(color).with_name(name);
        Player::create(&config, store).unwrap()
    }

    #[test]
    fn test_accessors() {
        let mut store = MemoryAttributes::new();
        let p = player("red", "Alice", &mut store);

        assert_eq!(p.color(), "red");
        assert_eq!(p.name(), "Alice");
        assert_eq!(p.score(), 0);
        assert!(!p.has_turn());
        assert_eq!(p.turn(), TurnState::NoTurn);
    }

    #[test]
    fn test_display_is_name() {
        let mut store = MemoryAttributes::new();
        let p = player("red", "Alice", &mut store);

        assert_eq!(p.to_string(), "Alice");
    }

    #[test]
    fn test_equality_by_name_only() {
        let mut store_a = MemoryAttributes::new();
        let mut store_b = MemoryAttributes::new();
        let mut store_c = MemoryAttributes::new();

        let alice = player("red", "Alice", &mut store_a);
        let also_alice = player("blue", "Alice", &mut store_b);
        let bob = player("red", "Bob", &mut store_c);

        assert_eq!(alice, alice);
        assert_eq!(alice, also_alice);
        assert_ne!(alice, bob);
        assert_eq!(alice, "Alice");
        assert_eq!(alice, "Alice".to_string());
        assert_ne!(alice, "alice");
    }

    #[test]
    fn test_score_roundtrip_and_clear() {
        let mut store = MemoryAttributes::new();
        let mut p = player("red", "Alice", &mut store);

        p.set_score(&mut store, Some(5));
        assert_eq!(p.score(), 5);
        assert_eq!(store.get_attribute(SCORE_ATTRIBUTE), Some("5"));

        p.set_score(&mut store, None);
        assert_eq!(p.score(), 0);
        assert!(!store.has_attribute(SCORE_ATTRIBUTE));
    }

    #[test]
    fn test_turn_cycle() {
        let mut store = MemoryAttributes::new();
        let mut p = player("red", "Alice", &mut store);

        p.start_turn(&mut store, &mut NullSink);
        assert!(p.has_turn());
        assert_eq!(store.get_attribute(HAS_TURN_ATTRIBUTE), Some("true"));

        p.end_turn(&mut store);
        assert!(!p.has_turn());
        assert!(!store.has_attribute(HAS_TURN_ATTRIBUTE));

        // Ending again is a harmless no-op
        p.end_turn(&mut store);
        assert!(!p.has_turn());
    }

    #[test]
    fn test_player_serialization() {
        let mut store = MemoryAttributes::new();
        let p = player("red", "Alice", &mut store);

        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
        assert_eq!(deserialized.color(), "red");
    }
}
