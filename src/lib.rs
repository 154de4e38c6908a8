pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpDeckSource;
pub use config::CliConfig;
pub use core::engine::ReadingEngine;
pub use core::provider::{DeckProvider, DeckState};
pub use core::rng::DrawRng;
pub use core::session::{transition, SessionEvent, SessionState};
pub use domain::model::{Deck, Reading, ReadingType, TarotCard};
pub use utils::error::{Result, TarotError};
