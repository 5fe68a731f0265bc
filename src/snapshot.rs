//! Lenient reading of pile snapshots produced by loosely typed clients.
//!
//! The strict form is plain serde (`serde_json::from_str::<PileSnapshot>`). The lenient form
//! accepts any JSON document: a root that is not an object, or a `deck`/`discard` field that is
//! missing or not an array, reads as an empty pile. Elements inside an array must still be cards.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::card::Card;
use crate::error::SnapshotError;
use crate::state::{Pile, PileSnapshot};

impl PileSnapshot {
    /// Parses `text` as JSON and reads it with [`PileSnapshot::from_json_lenient`].
    pub fn parse_lenient(text: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_lenient(&value)
    }

    pub fn parse_strict(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_lenient(value: &Value) -> Result<Self, SnapshotError> {
        if !value.is_object() {
            warn!(found = json_kind(value), "snapshot root is not an object, using empty piles");
        }
        Ok(Self {
            deck: read_pile(value, Pile::Deck)?,
            discard: read_pile(value, Pile::Discard)?,
        })
    }
}

fn read_pile(root: &Value, pile: Pile) -> Result<Vec<Card>, SnapshotError> {
    let key = match pile {
        Pile::Deck => "deck",
        Pile::Discard => "discard",
    };
    let items = match root.get(key) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            warn!(%pile, found = json_kind(other), "pile is not a sequence, treating as empty");
            return Ok(Vec::new());
        }
        None => return Ok(Vec::new()),
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Card::deserialize(item).map_err(|source| SnapshotError::InvalidCard {
                pile,
                index,
                source,
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
