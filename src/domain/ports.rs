use crate::domain::model::{Deck, ReadingType};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the deck comes from. The production implementation is an HTTP call;
/// tests swap in mock servers or canned decks.
#[async_trait]
pub trait DeckSource: Send + Sync {
    async fn fetch_deck(&self) -> Result<Deck>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn reading_type(&self) -> ReadingType;
    fn seed(&self) -> Option<u64>;
}
