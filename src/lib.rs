//! UNO draw-pile maintenance: recycling the discard history into a fresh, shuffled draw pile.

pub mod card;
pub mod error;
pub mod logging;
pub mod recycle;
pub mod simulate;
pub mod snapshot;
pub mod state;
pub mod visualize;

pub use crate::card::{
    Card, CardValue, Color, STANDARD_DECK_SIZE, WILD_ACTION_VALUES, standard_deck,
};
pub use crate::error::{ConfigError, SnapshotError};
pub use crate::recycle::{DEFAULT_SEED, DeckRecycler, RecyclerConfig, reconstruct};
pub use crate::simulate::{
    Simulation, SimulationBuilder, SimulationConfig, SimulationReport, TurnOutcome,
};
pub use crate::state::{Pile, PileSnapshot, Reconstruction};
pub use crate::visualize::{VisualOptions, describe_card, render_piles, render_reconstruction};
