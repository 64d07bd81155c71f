//! Command grammar and boundary validation.
//!
//! All user input is validated here, before anything reaches the stores or
//! the gateway: contract addresses must be 0x-prefixed 42-character strings
//! (lowercased on the way in), prices must be non-negative finite numbers.

use bot_core::HandlerError;

/// A parsed bot command with validated arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Price { contract: String, token_id: String },
    CoinPrice { contract: String },
    Track { contract: String, token_id: String },
    TrackCoin { contract: String },
    Portfolio,
    AnalyzePortfolio,
    Analyze { contract: String, token_id: String },
    AnalyzeCoin { contract: String },
    Trade { contract: String, token_id: String },
    TradeCoin { contract: String },
    TradingAnalysisCoin { contract: String },
    Signals,
    Alert { contract: String, target_price: f64 },
    Alerts,
    RemoveAlert { contract: String },
}

impl Command {
    /// Parses a `/command arg...` line. The caller has already checked the
    /// leading slash.
    pub fn parse(text: &str) -> Result<Command, HandlerError> {
        let mut parts = text.split_whitespace();
        let head = parts.next().ok_or(HandlerError::NoText)?;
        // Strip "/" and an optional "@botname" suffix used in group chats.
        let name = head
            .trim_start_matches('/')
            .split('@')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        match name.as_str() {
            "start" => Ok(Command::Start),
            "price" => {
                let (contract, token_id) = contract_and_token(&args)?;
                Ok(Command::Price { contract, token_id })
            }
            "coinprice" => Ok(Command::CoinPrice {
                contract: contract_arg(&args)?,
            }),
            "track" => {
                let (contract, token_id) = contract_and_token(&args)?;
                Ok(Command::Track { contract, token_id })
            }
            "trackcoin" => Ok(Command::TrackCoin {
                contract: contract_arg(&args)?,
            }),
            "portfolio" => Ok(Command::Portfolio),
            "analyzeportfolio" => Ok(Command::AnalyzePortfolio),
            "analyze" => {
                let (contract, token_id) = contract_and_token(&args)?;
                Ok(Command::Analyze { contract, token_id })
            }
            "analyzecoin" => Ok(Command::AnalyzeCoin {
                contract: contract_arg(&args)?,
            }),
            "trade" => {
                let (contract, token_id) = contract_and_token(&args)?;
                Ok(Command::Trade { contract, token_id })
            }
            "tradecoin" => Ok(Command::TradeCoin {
                contract: contract_arg(&args)?,
            }),
            "tradinganalysiscoin" => Ok(Command::TradingAnalysisCoin {
                contract: contract_arg(&args)?,
            }),
            "signals" => Ok(Command::Signals),
            "alert" => {
                let contract = contract_arg(&args)?;
                let raw = args.get(1).ok_or(HandlerError::MissingArgument("price"))?;
                Ok(Command::Alert {
                    contract,
                    target_price: parse_price(raw)?,
                })
            }
            "alerts" => Ok(Command::Alerts),
            "removealert" => Ok(Command::RemoveAlert {
                contract: contract_arg(&args)?,
            }),
            other => Err(HandlerError::UnknownCommand(other.to_string())),
        }
    }
}

/// Lowercases and validates an Ethereum-style contract address.
pub fn normalize_address(raw: &str) -> Result<String, HandlerError> {
    let addr = raw.to_ascii_lowercase();
    if !addr.starts_with("0x") || addr.len() != 42 {
        return Err(HandlerError::InvalidAddress(raw.to_string()));
    }
    Ok(addr)
}

/// Parses a target price: non-negative finite number. Zero is a valid, if
/// degenerate, threshold.
pub fn parse_price(raw: &str) -> Result<f64, HandlerError> {
    let price: f64 = raw
        .parse()
        .map_err(|_| HandlerError::InvalidPrice(raw.to_string()))?;
    if !price.is_finite() || price < 0.0 {
        return Err(HandlerError::InvalidPrice(raw.to_string()));
    }
    Ok(price)
}

fn contract_arg(args: &[&str]) -> Result<String, HandlerError> {
    let raw = args.first().ok_or(HandlerError::MissingArgument("contract"))?;
    normalize_address(raw)
}

fn contract_and_token(args: &[&str]) -> Result<(String, String), HandlerError> {
    let contract = contract_arg(args)?;
    let token_id = args
        .get(1)
        .ok_or(HandlerError::MissingArgument("tokenId"))?
        .to_string();
    Ok((contract, token_id))
}
