//! Session state as one explicit record plus a pure transition function.
//!
//! The presentation layer holds a single `SessionState` and feeds it events;
//! `transition` is the only place state changes, which keeps every transition
//! testable without any rendering involved.

use crate::core::provider::DeckState;
use crate::domain::model::{Deck, Reading, ReadingType};

/// Everything the reading screen tracks between events.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub deck: DeckState,
    pub reading_type: ReadingType,
    pub reading: Option<Reading>,
    /// Re-entrancy guard: while a draw is in flight, further draw requests
    /// are ignored rather than queued or cancelled.
    pub drawing: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            deck: DeckState::Idle,
            reading_type: ReadingType::YesNo,
            reading: None,
            drawing: false,
        }
    }

    /// A draw may start only once the deck is loaded and no draw is in flight.
    pub fn can_draw(&self) -> bool {
        self.deck.is_ready() && !self.drawing
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    DeckRequested,
    DeckLoaded(Deck),
    DeckFailed(String),
    ReadingTypeSelected(ReadingType),
    DrawStarted,
    DrawFinished(Reading),
}

/// Apply one event to the session. Pure: no I/O, no randomness, the returned
/// state is the whole effect.
pub fn transition(state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::DeckRequested => SessionState {
            deck: DeckState::Loading,
            ..state
        },
        SessionEvent::DeckLoaded(deck) => SessionState {
            deck: DeckState::Ready(deck),
            ..state
        },
        SessionEvent::DeckFailed(message) => SessionState {
            deck: DeckState::Failed(message),
            ..state
        },
        SessionEvent::ReadingTypeSelected(reading_type) => SessionState {
            reading_type,
            ..state
        },
        SessionEvent::DrawStarted => {
            if state.can_draw() {
                SessionState {
                    drawing: true,
                    ..state
                }
            } else {
                state
            }
        }
        SessionEvent::DrawFinished(reading) => SessionState {
            reading: Some(reading),
            drawing: false,
            ..state
        },
    }
}
