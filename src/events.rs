//! Turn-start notification channel.
//!
//! When a player starts a turn while attached to an active host, it announces
//! itself through an [`EventSink`] so an external turn coordinator can react,
//! typically by ending every other player's turn. The entity never enforces
//! turn exclusivity itself.
//!
//! ## Design Philosophy
//!
//! Dispatch is synchronous and fire-and-forget: listeners run on the current
//! call stack, no response is awaited, and there is no cancellation. The
//! notification is sent *before* the player's state flips to "has turn", so a
//! listener inspecting the player during dispatch observes the pre-transition
//! value.

use crate::player::Player;

/// Event name announced when a player starts a turn.
pub const START_TURN_EVENT: &str = "top:start-turn";

/// Notification channel into the player's enclosing host scope.
///
/// Implemented by the hosting environment. Delivery is expected only while
/// the player is attached to an active host; a detached sink reports
/// `is_attached() == false` and receives no dispatches.
pub trait EventSink {
    /// Is the player currently attached to an active hosting scope?
    fn is_attached(&self) -> bool;

    /// Deliver a named event carrying the player that raised it.
    ///
    /// Called with [`START_TURN_EVENT`] from [`Player::start_turn`].
    fn dispatch(&mut self, event: &str, player: &Player);
}

/// Sink for players without a hosting scope.
///
/// Never attached; dispatch is unreachable in practice and a no-op anyway.
/// Useful for score-keeping contexts that never run turns through a host.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn is_attached(&self) -> bool {
        false
    }

    fn dispatch(&mut self, _event: &str, _player: &Player) {}
}
