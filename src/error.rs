use thiserror::Error;

use crate::state::Pile;

/// Errors raised while reading a pile snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{pile} card at index {index} is malformed: {source}")]
    InvalidCard {
        pile: Pile,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid simulation or recycler settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count {0} is out of range (2-10)")]
    PlayerCount(usize),
    #[error("hand size must be positive")]
    EmptyHand,
    #[error("dealing hands and a starting discard needs {needed} cards, deck has {deck}")]
    DeckTooSmall { needed: usize, deck: usize },
}
