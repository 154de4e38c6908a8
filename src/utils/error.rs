use thiserror::Error;

#[derive(Error, Debug)]
pub enum TarotError {
    /// Network failure, non-success status or undecodable body while loading
    /// the deck. A single kind on purpose: the caller's only recovery is to
    /// try the load again.
    #[error("failed to load tarot deck: {message}")]
    Fetch { message: String },

    #[error("deck has {available} cards but a {requested}-card reading was requested")]
    InsufficientDeck { requested: usize, available: usize },

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl TarotError {
    pub fn fetch(message: impl Into<String>) -> Self {
        TarotError::Fetch {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TarotError {
    fn from(err: reqwest::Error) -> Self {
        TarotError::Fetch {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TarotError>;
