pub mod engine;
pub mod imagery;
pub mod interpretation;
pub mod provider;
pub mod rng;
pub mod session;

pub use crate::domain::model::{Deck, Reading, ReadingType, TarotCard};
pub use crate::domain::ports::{ConfigProvider, DeckSource};
pub use crate::utils::error::Result;
