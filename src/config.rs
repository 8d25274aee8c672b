//! Player construction configuration and two-source field resolution.
//!
//! A player can be configured two ways: explicitly, through a
//! [`PlayerConfig`], or declaratively, through attributes already present on
//! the host's [`AttributeStore`]. Resolution merges the two sources per
//! field: an explicit value wins over an attribute, an attribute wins over
//! the default. Winning explicit values are written back to the store so the
//! external representation matches internal state from the start.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::attributes::{
    AttributeStore, COLOR_ATTRIBUTE, HAS_TURN_ATTRIBUTE, NAME_ATTRIBUTE, SCORE_ATTRIBUTE,
};
use crate::error::ConfigurationError;
use crate::player::TurnState;

/// Optional construction inputs for a player.
///
/// All fields default to absent; absent fields fall back to the host's
/// attribute store during resolution.
///
/// ## Example
///
/// ```
/// use top_player::PlayerConfig;
///
/// let config = PlayerConfig::new()
///     .with_color("navy")
///     .with_name("Alice")
///     .with_score(12);
///
/// assert_eq!(config.name.as_deref(), Some("Alice"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// The player's color in the game.
    pub color: Option<String>,

    /// The player's name.
    pub name: Option<String>,

    /// The player's starting score.
    ///
    /// A zero here is treated as absent during resolution, like every other
    /// non-truthy value.
    pub score: Option<i64>,

    /// Whether the player starts holding the turn. Only an explicit `true`
    /// has any effect.
    pub has_turn: Option<bool>,
}

impl PlayerConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for a placeholder "system" player (color `"red"`, name `"*"`).
    ///
    /// For contexts that need a player without a full game setup, such as
    /// rendering dice that nobody owns. Construct your own instance from it
    /// rather than sharing one.
    #[must_use]
    pub fn system_player() -> Self {
        Self::new().with_color("red").with_name("*")
    }

    /// Set the color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the starting score (builder pattern).
    #[must_use]
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }

    /// Set the initial turn flag (builder pattern).
    #[must_use]
    pub fn with_has_turn(mut self, has_turn: bool) -> Self {
        self.has_turn = Some(has_turn);
        self
    }
}

/// Fully resolved construction state, ready to become a `Player`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ResolvedPlayer {
    pub(crate) color: String,
    pub(crate) name: String,
    pub(crate) score: Option<i64>,
    pub(crate) turn: TurnState,
}

/// Merge explicit configuration with the host's pre-existing attributes.
///
/// Per field: explicit value wins over attribute, attribute wins over the
/// default. Winning explicit values are written to the store. `color` and
/// `name` have no default; resolution fails when neither source supplies
/// them.
pub(crate) fn resolve(
    config: &PlayerConfig,
    store: &mut dyn AttributeStore,
) -> Result<ResolvedPlayer, ConfigurationError> {
    let color = resolve_identity(
        config.color.as_deref(),
        store,
        COLOR_ATTRIBUTE,
        ConfigurationError::MissingColor,
    )?;

    let name = resolve_identity(
        config.name.as_deref(),
        store,
        NAME_ATTRIBUTE,
        ConfigurationError::MissingName,
    )?;

    let score = match config.score {
        Some(s) if s != 0 => {
            store.set_attribute(SCORE_ATTRIBUTE, &s.to_string());
            Some(s)
        }
        _ => {
            // Quirk: a pre-existing score attribute is consulted only when
            // it FAILS to parse as an integer, so a parseable value is never
            // adopted, and a failed parse yields no number to adopt. Either
            // way the score stays unset. See DESIGN.md before changing this.
            if let Some(raw) = store.get_attribute(SCORE_ATTRIBUTE) {
                if raw.parse::<i64>().is_err() {
                    trace!("score attribute {raw:?} does not parse; score stays unset");
                }
            }
            None
        }
    };

    let turn = if config.has_turn == Some(true) {
        store.set_attribute(HAS_TURN_ATTRIBUTE, "true");
        TurnState::HasTurn
    } else if store.has_attribute(HAS_TURN_ATTRIBUTE) {
        // Attribute presence alone grants the turn, whatever its value.
        TurnState::HasTurn
    } else {
        TurnState::NoTurn
    };

    trace!(
        "resolved player: color={color:?} name={name:?} score={score:?} turn={turn:?}"
    );

    Ok(ResolvedPlayer {
        color,
        name,
        score,
        turn,
    })
}

/// Resolve a required identity field (`color` or `name`).
fn resolve_identity(
    explicit: Option<&str>,
    store: &mut dyn AttributeStore,
    attribute: &str,
    missing: ConfigurationError,
) -> Result<String, ConfigurationError> {
    match explicit {
        Some(value) if !value.is_empty() => {
            store.set_attribute(attribute, value);
            Ok(value.to_string())
        }
        _ => match store.get_attribute(attribute) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(missing),
        },
    }
}
