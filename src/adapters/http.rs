use crate::domain::model::Deck;
use crate::domain::ports::{ConfigProvider, DeckSource};
use crate::utils::error::{Result, TarotError};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the deck over HTTP from the configured endpoint.
///
/// One GET, no auth, no pagination, no retry. Anything short of a success
/// status with a decodable body is a fetch failure.
pub struct HttpDeckSource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpDeckSource<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> DeckSource for HttpDeckSource<C> {
    async fn fetch_deck(&self) -> Result<Deck> {
        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        let response = self.client.get(self.config.api_endpoint()).send().await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(TarotError::fetch(format!(
                "deck API returned status {}",
                response.status()
            )));
        }

        let deck: Deck = response.json().await?;
        Ok(deck)
    }
}
