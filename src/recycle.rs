//! Rebuilding an exhausted draw pile from the discard history.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::card::Card;
use crate::state::{PileSnapshot, Reconstruction};

pub const DEFAULT_SEED: u64 = 0x5EED_0DEC_CA4D_5EED;

/// Recycles the discard pile into a new draw pile when the draw pile is empty.
///
/// * A non-empty draw pile is returned untouched together with the discard pile.
/// * With an empty draw pile and at most one discarded card there is nothing to recycle; both
///   piles are returned as-is and `rebuilt` stays false.
/// * Otherwise every card below the discard top is normalized (wild actions lose their chosen
///   color), shuffled and becomes the draw pile. The top card stays alone on the discard pile.
///
/// The input snapshot is never modified.
pub fn reconstruct<R: Rng + ?Sized>(snapshot: &PileSnapshot, rng: &mut R) -> Reconstruction {
    let (top, history) = match snapshot.discard.split_last() {
        Some((top, history)) if snapshot.deck.is_empty() && !history.is_empty() => (top, history),
        _ => {
            return Reconstruction {
                deck: snapshot.deck.clone(),
                discard: snapshot.discard.clone(),
                rebuilt: false,
            };
        }
    };
    let mut deck: Vec<Card> = history.iter().map(Card::normalized_for_recycle).collect();
    deck.shuffle(rng);

    debug!(
        recycled = deck.len(),
        top_value = %top.value,
        top_color = %top.color,
        "rebuilt draw pile from discard"
    );

    Reconstruction {
        deck,
        discard: vec![top.clone()],
        rebuilt: true,
    }
}

/// Settings for a [`DeckRecycler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecyclerConfig {
    pub seed: u64,
}

impl Default for RecyclerConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

/// Owns the randomness source of one game session and recycles its piles on demand.
pub struct DeckRecycler<R: Rng = StdRng> {
    rng: R,
    rebuilds: usize,
}

impl DeckRecycler<StdRng> {
    pub fn new(config: RecyclerConfig) -> Self {
        Self::seeded(config.seed)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for DeckRecycler<StdRng> {
    fn default() -> Self {
        Self::new(RecyclerConfig::default())
    }
}

impl<R: Rng> DeckRecycler<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng, rebuilds: 0 }
    }

    pub fn reconstruct(&mut self, snapshot: &PileSnapshot) -> Reconstruction {
        let result = reconstruct(snapshot, &mut self.rng);
        if result.rebuilt {
            self.rebuilds += 1;
        }
        result
    }

    /// Number of reconstructions that actually reshuffled.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }
}
