use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Card colors. `Wild` marks a card whose color has not been chosen yet.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

pub const SUIT_COLORS: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

impl Color {
    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self, Color::Wild)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Wild => "wild",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Face value of a card: a rank or a special action.
///
/// Serialized as its plain label (`"7"`, `"+4"`, `"discard_all"`). Labels this crate does not
/// know are kept verbatim in [`CardValue::Other`] so they survive a round trip.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardValue {
    /// Numbered card between 0 and 9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    DrawFour,
    DrawSix,
    DrawEight,
    Swap,
    DiscardAll,
    SkipAll,
    Other(String),
}

/// Labels of every wild-action value. Mirrors [`CardValue::is_wild_action`].
pub const WILD_ACTION_VALUES: [&str; 7] =
    ["wild", "+4", "+6", "+8", "swap", "discard_all", "skip_all"];

impl CardValue {
    /// Returns true for colorless actions whose color resets to wild when recycled.
    ///
    /// This is the only definition of wild-action membership in the crate.
    pub fn is_wild_action(&self) -> bool {
        matches!(
            self,
            CardValue::Wild
                | CardValue::DrawFour
                | CardValue::DrawSix
                | CardValue::DrawEight
                | CardValue::Swap
                | CardValue::DiscardAll
                | CardValue::SkipAll
        )
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Number(n) => write!(f, "{n}"),
            CardValue::Skip => f.write_str("skip"),
            CardValue::Reverse => f.write_str("reverse"),
            CardValue::DrawTwo => f.write_str("+2"),
            CardValue::Wild => f.write_str("wild"),
            CardValue::DrawFour => f.write_str("+4"),
            CardValue::DrawSix => f.write_str("+6"),
            CardValue::DrawEight => f.write_str("+8"),
            CardValue::Swap => f.write_str("swap"),
            CardValue::DiscardAll => f.write_str("discard_all"),
            CardValue::SkipAll => f.write_str("skip_all"),
            CardValue::Other(label) => f.write_str(label),
        }
    }
}

impl FromStr for CardValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = match s {
            "skip" => CardValue::Skip,
            "reverse" => CardValue::Reverse,
            "+2" => CardValue::DrawTwo,
            "wild" => CardValue::Wild,
            "+4" => CardValue::DrawFour,
            "+6" => CardValue::DrawSix,
            "+8" => CardValue::DrawEight,
            "swap" => CardValue::Swap,
            "discard_all" => CardValue::DiscardAll,
            "skip_all" => CardValue::SkipAll,
            _ => match s.parse::<u8>() {
                Ok(n) if n <= 9 && s.len() == 1 => CardValue::Number(n),
                _ => CardValue::Other(s.to_string()),
            },
        };
        Ok(value)
    }
}

impl From<String> for CardValue {
    fn from(label: String) -> Self {
        match label.parse() {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl From<CardValue> for String {
    fn from(value: CardValue) -> Self {
        value.to_string()
    }
}

/// An UNO card. Compared by content; unknown JSON fields are carried in `extra`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub value: CardValue,
    pub color: Color,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Card {
    pub fn new(value: CardValue, color: Color) -> Self {
        Self {
            value,
            color,
            extra: BTreeMap::new(),
        }
    }

    pub fn number(n: u8, color: Color) -> Self {
        debug_assert!(n <= 9);
        Self::new(CardValue::Number(n), color)
    }

    #[inline]
    pub fn is_wild_action(&self) -> bool {
        self.value.is_wild_action()
    }

    /// Copy of the card as it re-enters the draw pile: wild-action cards lose their chosen color.
    pub fn normalized_for_recycle(&self) -> Card {
        let mut card = self.clone();
        if card.is_wild_action() {
            card.color = Color::Wild;
        }
        card
    }
}

pub const STANDARD_DECK_SIZE: usize = 108;
pub const WILD_COPIES: usize = 4;

/// Builds the classic 108-card deck in deterministic order (unshuffled).
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(STANDARD_DECK_SIZE);
    for color in SUIT_COLORS {
        deck.push(Card::number(0, color));
        for _ in 0..2 {
            for n in 1..=9 {
                deck.push(Card::number(n, color));
            }
            deck.push(Card::new(CardValue::Skip, color));
            deck.push(Card::new(CardValue::Reverse, color));
            deck.push(Card::new(CardValue::DrawTwo, color));
        }
    }
    for _ in 0..WILD_COPIES {
        deck.push(Card::new(CardValue::Wild, Color::Wild));
        deck.push(Card::new(CardValue::DrawFour, Color::Wild));
    }
    deck
}
