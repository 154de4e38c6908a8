use crate::core::rng::DrawRng;
use crate::domain::model::{Deck, Reading, ReadingType};
use crate::utils::error::{Result, TarotError};

/// Draws readings from a loaded deck.
///
/// A draw shuffles the whole deck with Fisher-Yates and keeps the prefix of
/// the requested size, so every card is equally likely to appear and no card
/// repeats within one reading.
pub struct ReadingEngine {
    rng: DrawRng,
}

impl ReadingEngine {
    pub fn new(rng: DrawRng) -> Self {
        Self { rng }
    }

    /// Draw a reading of `reading_type.draw_size()` cards without replacement.
    ///
    /// A deck smaller than the draw size is an error, never a silently
    /// truncated reading.
    pub fn draw(&mut self, deck: &Deck, reading_type: ReadingType) -> Result<Reading> {
        let requested = reading_type.draw_size();
        if deck.len() < requested {
            return Err(TarotError::InsufficientDeck {
                requested,
                available: deck.len(),
            });
        }

        tracing::debug!(
            "Drawing {} of {} cards for a {} reading",
            requested,
            deck.len(),
            reading_type
        );

        let mut shuffled = deck.cards().to_vec();
        self.rng.shuffle(&mut shuffled);
        shuffled.truncate(requested);

        Ok(Reading {
            reading_type,
            cards: shuffled,
        })
    }
}
