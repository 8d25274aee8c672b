//! Construction failure type.

use serde::{Deserialize, Serialize};

/// Raised when a player cannot be constructed from the supplied
/// configuration and attribute store.
///
/// Only construction fails; every other operation on a player is total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ConfigurationError {
    /// Neither the configuration nor the attribute store supplied a
    /// non-empty color.
    #[error("a Player needs a color, which is a String")]
    MissingColor,

    /// Neither the configuration nor the attribute store supplied a
    /// non-empty name.
    #[error("a Player needs a name, which is a String")]
    MissingName,
}
