//! Attribute reflection for a player's externally visible state.
//!
//! A player's host keeps a declarative, string-valued representation of the
//! player in four attributes: `color`, `name`, `score`, `has-turn`. The
//! entity keeps that representation in sync with its internal fields after
//! every mutation.
//!
//! ## AttributeStore
//!
//! The host side of the sync. Hosts (a UI element, a markup-derived node)
//! implement this trait; the entity only reads and writes through it.
//!
//! ## MemoryAttributes
//!
//! A plain in-memory store for headless hosts and tests. Pre-populate it to
//! model declaratively supplied initial state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Attribute holding the player's color.
pub const COLOR_ATTRIBUTE: &str = "color";

/// Attribute holding the player's name.
pub const NAME_ATTRIBUTE: &str = "name";

/// Attribute holding the player's score.
pub const SCORE_ATTRIBUTE: &str = "score";

/// Attribute present while the player holds the turn.
pub const HAS_TURN_ATTRIBUTE: &str = "has-turn";

/// External key/value representation of a player's state.
///
/// Implemented by the hosting environment. Values are strings, as in a
/// markup-derived host; the entity does any parsing it needs.
pub trait AttributeStore {
    /// Is the attribute present (with any value)?
    fn has_attribute(&self, name: &str) -> bool;

    /// Get an attribute's value, or `None` when absent.
    fn get_attribute(&self, name: &str) -> Option<&str>;

    /// Set an attribute, replacing any previous value.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Remove an attribute. Removing an absent attribute is a no-op.
    fn remove_attribute(&mut self, name: &str);
}

/// In-memory [`AttributeStore`] backed by a hash map.
///
/// ## Example
///
/// ```
/// use top_player::{AttributeStore, MemoryAttributes, COLOR_ATTRIBUTE};
///
/// // Declaratively supplied initial state
/// let mut store: MemoryAttributes =
///     [(COLOR_ATTRIBUTE, "navy"), ("name", "Alice")].into_iter().collect();
///
/// assert_eq!(store.get_attribute(COLOR_ATTRIBUTE), Some("navy"));
/// store.remove_attribute(COLOR_ATTRIBUTE);
/// assert!(!store.has_attribute(COLOR_ATTRIBUTE));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryAttributes {
    entries: FxHashMap<String, String>,
}

impl MemoryAttributes {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes currently set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the store empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AttributeStore for MemoryAttributes {
    fn has_attribute(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn get_attribute(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.entries.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.entries.remove(name);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
