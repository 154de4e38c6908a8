use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One tarot card as returned by the deck API.
///
/// `name_short` is the stable identifier: unique across the deck and used to
/// build the card image URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarotCard {
    #[serde(rename = "type")]
    pub arcana: String,
    pub name_short: String,
    pub name: String,
    pub value: String,
    pub value_int: i64,
    pub meaning_up: String,
    pub meaning_rev: String,
    pub desc: String,
}

/// The full deck as fetched from the API.
///
/// Deserializes straight from the response body `{ "cards": [...] }`; sibling
/// fields like `nhits` are ignored. Card order is whatever the source
/// returned, stable only for a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<TarotCard>,
}

impl Deck {
    pub fn new(cards: Vec<TarotCard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[TarotCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The reading shape the user picked. Exactly three variants; each implies a
/// fixed draw size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingType {
    YesNo,
    ThreeCard,
    SevenCard,
}

impl ReadingType {
    /// Number of cards drawn for this reading.
    pub fn draw_size(&self) -> usize {
        match self {
            ReadingType::YesNo => 1,
            ReadingType::ThreeCard => 3,
            ReadingType::SevenCard => 7,
        }
    }
}

impl FromStr for ReadingType {
    type Err = String;

    // Selector values match the original client: yesno / three / seven.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yesno" => Ok(ReadingType::YesNo),
            "three" => Ok(ReadingType::ThreeCard),
            "seven" => Ok(ReadingType::SevenCard),
            other => Err(format!(
                "unknown reading type '{}' (expected yesno, three or seven)",
                other
            )),
        }
    }
}

impl fmt::Display for ReadingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReadingType::YesNo => "yesno",
            ReadingType::ThreeCard => "three",
            ReadingType::SevenCard => "seven",
        };
        f.write_str(s)
    }
}

/// A drawn reading: an ordered subset of the deck, sized by the reading type.
/// Each draw fully replaces the previous one; no history is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub reading_type: ReadingType,
    pub cards: Vec<TarotCard>,
}
