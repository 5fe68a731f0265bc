use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Which of the two piles a card belongs to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Pile {
    Deck,
    Discard,
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pile::Deck => f.write_str("deck"),
            Pile::Discard => f.write_str("discard"),
        }
    }
}

/// Draw and discard piles handed to the recycler.
///
/// `deck` is the draw pile; the last element of `discard` is the visible top card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PileSnapshot {
    pub deck: Vec<Card>,
    pub discard: Vec<Card>,
}

impl PileSnapshot {
    pub fn new(deck: Vec<Card>, discard: Vec<Card>) -> Self {
        Self { deck, discard }
    }

    pub fn discard_top(&self) -> Option<&Card> {
        self.discard.last()
    }

    pub fn card_count(&self) -> usize {
        self.deck.len() + self.discard.len()
    }
}

/// Result of a reconstruction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reconstruction {
    pub deck: Vec<Card>,
    pub discard: Vec<Card>,
    /// True iff the discard history was reshuffled into the draw pile.
    pub rebuilt: bool,
}

impl Reconstruction {
    /// Nothing left to draw and nothing eligible to recycle. The caller decides what ends.
    pub fn is_stalemate(&self) -> bool {
        !self.rebuilt && self.deck.is_empty()
    }

    pub fn discard_top(&self) -> Option<&Card> {
        self.discard.last()
    }

    pub fn into_snapshot(self) -> PileSnapshot {
        PileSnapshot {
            deck: self.deck,
            discard: self.discard,
        }
    }
}
