use crate::domain::model::Deck;
use crate::domain::ports::DeckSource;
use crate::utils::error::{Result, TarotError};

/// Where the provider is in its one-shot fetch lifecycle.
///
/// `Idle -> Loading -> Ready | Failed`. Once settled it stays put; calling
/// [`DeckProvider::load`] again is the only way back through `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckState {
    Idle,
    Loading,
    Ready(Deck),
    Failed(String),
}

impl DeckState {
    pub fn is_ready(&self) -> bool {
        matches!(self, DeckState::Ready(_))
    }
}

/// Fetches the deck through a [`DeckSource`] and tracks the result.
///
/// No caching policy beyond "hold what the last load returned", no automatic
/// retry: a failed load stays `Failed` until the caller invokes `load` again.
pub struct DeckProvider<S: DeckSource> {
    source: S,
    state: DeckState,
}

impl<S: DeckSource> DeckProvider<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: DeckState::Idle,
        }
    }

    pub fn state(&self) -> &DeckState {
        &self.state
    }

    pub fn deck(&self) -> Option<&Deck> {
        match &self.state {
            DeckState::Ready(deck) => Some(deck),
            _ => None,
        }
    }

    /// Fetch the deck from the source.
    ///
    /// An empty `cards` array is treated as a fetch failure: the upstream
    /// contract promises at least one card.
    pub async fn load(&mut self) -> Result<&Deck> {
        self.state = DeckState::Loading;
        tracing::debug!("Loading tarot deck");

        match self.source.fetch_deck().await {
            Ok(deck) if deck.is_empty() => {
                let err = TarotError::fetch("deck response contained no cards");
                self.state = DeckState::Failed(err.to_string());
                Err(err)
            }
            Ok(deck) => {
                tracing::info!("Loaded deck with {} cards", deck.len());
                self.state = DeckState::Ready(deck);
                match &self.state {
                    DeckState::Ready(deck) => Ok(deck),
                    _ => unreachable!(),
                }
            }
            Err(err) => {
                tracing::error!("Deck load failed: {}", err);
                self.state = DeckState::Failed(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TarotCard;
    use async_trait::async_trait;

    struct CannedSource {
        deck: Option<Deck>,
    }

    #[async_trait]
    impl DeckSource for CannedSource {
        async fn fetch_deck(&self) -> Result<Deck> {
            match &self.deck {
                Some(deck) => Ok(deck.clone()),
                None => Err(TarotError::fetch("connection refused")),
            }
        }
    }

    fn card(name_short: &str) -> TarotCard {
        TarotCard {
            arcana: "major".to_string(),
            name_short: name_short.to_string(),
            name: name_short.to_uppercase(),
            value: "0".to_string(),
            value_int: 0,
            meaning_up: String::new(),
            meaning_rev: String::new(),
            desc: String::new(),
        }
    }

    #[tokio::test]
    async fn load_moves_idle_to_ready() {
        let deck = Deck::new(vec![card("ar00"), card("ar01")]);
        let mut provider = DeckProvider::new(CannedSource {
            deck: Some(deck.clone()),
        });

        assert_eq!(provider.state(), &DeckState::Idle);
        let loaded = provider.load().await.unwrap();
        assert_eq!(loaded, &deck);
        assert!(provider.state().is_ready());
        assert_eq!(provider.deck(), Some(&deck));
    }

    #[tokio::test]
    async fn failed_source_leaves_provider_failed() {
        let mut provider = DeckProvider::new(CannedSource { deck: None });

        let err = provider.load().await.unwrap_err();
        assert!(matches!(err, TarotError::Fetch { .. }));
        assert!(matches!(provider.state(), DeckState::Failed(_)));
        assert!(provider.deck().is_none());
    }

    #[tokio::test]
    async fn empty_deck_is_a_fetch_failure() {
        let mut provider = DeckProvider::new(CannedSource {
            deck: Some(Deck::new(vec![])),
        });

        let err = provider.load().await.unwrap_err();
        assert!(matches!(err, TarotError::Fetch { .. }));
        assert!(matches!(provider.state(), DeckState::Failed(_)));
    }
}
