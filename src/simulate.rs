//! Draw/discard loop that keeps a table of players going until the piles run dry.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::card::{Card, SUIT_COLORS, standard_deck};
use crate::error::ConfigError;
use crate::recycle::{DEFAULT_SEED, DeckRecycler};
use crate::state::PileSnapshot;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;
pub const DEFAULT_HAND_SIZE: usize = 7;
pub const DEFAULT_MAX_TURNS: usize = 500;

/// Settings for a simulated table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub players: usize,
    pub hand_size: usize,
    pub max_turns: usize,
    pub seed: u64,
}

impl SimulationConfig {
    pub fn new(players: usize) -> Result<Self, ConfigError> {
        let config = Self {
            players,
            hand_size: DEFAULT_HAND_SIZE,
            max_turns: DEFAULT_MAX_TURNS,
            seed: DEFAULT_SEED,
        };
        config.validate(crate::card::STANDARD_DECK_SIZE)?;
        Ok(config)
    }

    /// Checks the settings against a deck of `deck_size` cards.
    pub fn validate(&self, deck_size: usize) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::PlayerCount(self.players));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        let needed = self.players * self.hand_size + 1;
        if deck_size < needed {
            return Err(ConfigError::DeckTooSmall {
                needed,
                deck: deck_size,
            });
        }
        Ok(())
    }
}

/// Builder that allows deterministic deck injection for tests.
pub struct SimulationBuilder {
    config: SimulationConfig,
    deck: Option<Vec<Card>>,
}

impl SimulationBuilder {
    pub fn new(players: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            config: SimulationConfig::new(players)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.config.max_turns = max_turns;
        self
    }

    /// Use `deck` as-is instead of a shuffled standard deck. Cards are dealt from the end.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Simulation, ConfigError> {
        Simulation::from_builder(self)
    }
}

/// Outcome of a single turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played { rebuilt: bool },
    Stalemate,
    TurnLimit,
}

/// Summary of a finished run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationReport {
    pub turns: usize,
    pub rebuilds: usize,
    pub stalemate: bool,
    pub cards_in_play: usize,
}

pub struct Simulation {
    config: SimulationConfig,
    hands: Vec<Vec<Card>>,
    piles: PileSnapshot,
    recycler: DeckRecycler,
    rng: StdRng,
    current_player: usize,
    turns: usize,
    stalemate: bool,
}

impl Simulation {
    pub fn builder(players: usize) -> Result<SimulationBuilder, ConfigError> {
        SimulationBuilder::new(players)
    }

    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        SimulationBuilder { config, deck: None }.build()
    }

    fn from_builder(builder: SimulationBuilder) -> Result<Self, ConfigError> {
        let SimulationBuilder { config, deck } = builder;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut deck = match deck {
            Some(deck) => deck,
            None => {
                let mut deck = standard_deck();
                deck.shuffle(&mut rng);
                deck
            }
        };
        config.validate(deck.len())?;

        let mut hands = vec![Vec::with_capacity(config.hand_size + 1); config.players];
        for _ in 0..config.hand_size {
            for hand in hands.iter_mut() {
                if let Some(card) = deck.pop() {
                    hand.push(card);
                }
            }
        }
        let discard: Vec<Card> = deck.pop().into_iter().collect();
        // The recycler gets its own stream so deck shuffles do not depend on discard choices.
        let recycler = DeckRecycler::seeded(rng.r#gen::<u64>());

        Ok(Self {
            config,
            hands,
            piles: PileSnapshot::new(deck, discard),
            recycler,
            rng,
            current_player: 0,
            turns: 0,
            stalemate: false,
        })
    }

    pub fn piles(&self) -> &PileSnapshot {
        &self.piles
    }

    pub fn hand(&self, player: usize) -> Option<&[Card]> {
        self.hands.get(player).map(Vec::as_slice)
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn rebuilds(&self) -> usize {
        self.recycler.rebuilds()
    }

    pub fn is_finished(&self) -> bool {
        self.stalemate || self.turns >= self.config.max_turns
    }

    /// Every card currently held or on the table.
    pub fn cards_in_play(&self) -> usize {
        self.piles.card_count() + self.hands.iter().map(Vec::len).sum::<usize>()
    }

    /// Current player draws one card, then discards a random card from their hand.
    ///
    /// A discarded wild action gets a randomly chosen color, as a player would pick one.
    pub fn step(&mut self) -> TurnOutcome {
        if self.stalemate {
            return TurnOutcome::Stalemate;
        }
        if self.turns >= self.config.max_turns {
            return TurnOutcome::TurnLimit;
        }

        let mut rebuilt = false;
        if self.piles.deck.is_empty() {
            let result = self.recycler.reconstruct(&self.piles);
            if result.is_stalemate() {
                info!(turn = self.turns, "no cards left to recycle");
                self.stalemate = true;
                return TurnOutcome::Stalemate;
            }
            rebuilt = result.rebuilt;
            self.piles = result.into_snapshot();
        }

        let player = self.current_player;
        if let Some(card) = self.piles.deck.pop() {
            self.hands[player].push(card);
        }
        let hand = &mut self.hands[player];
        if !hand.is_empty() {
            let index = self.rng.gen_range(0..hand.len());
            let mut card = hand.remove(index);
            if card.is_wild_action() {
                if let Some(color) = SUIT_COLORS.choose(&mut self.rng) {
                    card.color = *color;
                }
            }
            debug!(player, card = %crate::visualize::describe_card(&card), "discard");
            self.piles.discard.push(card);
        }

        self.turns += 1;
        self.current_player = (self.current_player + 1) % self.hands.len();
        TurnOutcome::Played { rebuilt }
    }

    /// Plays until the turn limit or a stalemate.
    pub fn run(&mut self) -> SimulationReport {
        while !self.is_finished() {
            self.step();
        }
        self.report()
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            turns: self.turns,
            rebuilds: self.recycler.rebuilds(),
            stalemate: self.stalemate,
            cards_in_play: self.cards_in_play(),
        }
    }
}
