use std::fmt::Write;

use crate::card::Card;
use crate::state::{PileSnapshot, Reconstruction};

/// Customize pile rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    /// List every card of the draw pile instead of only its size.
    pub show_deck_cards: bool,
    /// Number of discard cards shown below the top, most recent first.
    pub discard_history: usize,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_deck_cards: false,
            discard_history: 3,
        }
    }
}

/// Short label such as `red 5` or `wild +4`.
pub fn describe_card(card: &Card) -> String {
    format!("{} {}", card.color, card.value)
}

pub fn render_piles(snapshot: &PileSnapshot) -> String {
    render_piles_with_options(snapshot, VisualOptions::default())
}

pub fn render_piles_with_options(snapshot: &PileSnapshot, options: VisualOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Draw pile: {}  |  Discard pile: {}",
        snapshot.deck.len(),
        snapshot.discard.len()
    );
    if options.show_deck_cards && !snapshot.deck.is_empty() {
        let cards = snapshot
            .deck
            .iter()
            .map(describe_card)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "  Deck: [{cards}]");
    }
    let top = snapshot
        .discard_top()
        .map(describe_card)
        .unwrap_or_else(|| String::from("--"));
    let _ = writeln!(out, "  Top: {top}");
    if options.discard_history > 0 && snapshot.discard.len() > 1 {
        let below = snapshot
            .discard
            .iter()
            .rev()
            .skip(1)
            .take(options.discard_history)
            .map(describe_card)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "  Below: {below}");
    }
    out
}

pub fn render_reconstruction(result: &Reconstruction) -> String {
    let mut out = String::new();
    let status = if result.rebuilt {
        format!("rebuilt ({} cards recycled)", result.deck.len())
    } else if result.is_stalemate() {
        String::from("stalemate (nothing to recycle)")
    } else {
        String::from("unchanged")
    };
    let _ = writeln!(out, "Reconstruction: {status}");
    let snapshot = PileSnapshot::new(result.deck.clone(), result.discard.clone());
    out.push_str(&render_piles(&snapshot));
    out
}
