//! Errors returned by the Zora API client. Every variant is a lookup
//! failure from the bot's point of view: the caller logs it and retries
//! later (or tells the user the lookup failed).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoraError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("coin data not found for {0}")]
    CoinNotFound(String),

    #[error("token data not found for {contract} #{token_id}")]
    TokenNotFound { contract: String, token_id: String },

    #[error("unexpected response: {0}")]
    BadResponse(String),
}

pub type Result<T> = std::result::Result<T, ZoraError>;
