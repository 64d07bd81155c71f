//! Command dispatch: parses the message, calls the market data gateway, AI
//! client and stores, and builds the reply text.
//!
//! Every service failure turns into a user-facing reply plus a warn log;
//! nothing here is fatal.

use std::sync::Arc;

use ai_client::AiClient;
use async_trait::async_trait;
use bot_core::{Handler, HandlerError, HandlerResponse, Message, Result};
use tracing::warn;
use zora_client::{analyze_coin, analyze_token, ZoraClient};

use crate::alerts::AlertStore;
use crate::commands::Command;
use crate::format;
use crate::portfolio::{PortfolioItem, PortfolioStore};

pub struct CommandHandler {
    zora: ZoraClient,
    ai: AiClient,
    portfolio: Arc<PortfolioStore>,
    alerts: Arc<AlertStore>,
}

impl CommandHandler {
    pub fn new(
        zora: ZoraClient,
        ai: AiClient,
        portfolio: Arc<PortfolioStore>,
        alerts: Arc<AlertStore>,
    ) -> Self {
        Self {
            zora,
            ai,
            portfolio,
            alerts,
        }
    }

    async fn execute(&self, chat_id: i64, command: Command) -> String {
        match command {
            Command::Start => format::welcome(),

            Command::Price { contract, token_id } => {
                match self.zora.get_token(&contract, &token_id).await {
                    Ok(token) => format::token_price(&token_id, token.price()),
                    Err(e) => {
                        warn!(chat_id, contract = %contract, error = %e, "price lookup failed");
                        "Error fetching price. Please make sure the contract address and token ID are correct and try again.".to_string()
                    }
                }
            }

            Command::CoinPrice { contract } => match self.zora.get_coin(&contract).await {
                Ok(coin) => format::coin_card(&contract, &coin),
                Err(e) => {
                    warn!(chat_id, contract = %contract, error = %e, "coin lookup failed");
                    "Error fetching coin price. Please make sure the contract address is correct and try again.".to_string()
                }
            },

            Command::Track { contract, token_id } => {
                match self.zora.get_token(&contract, &token_id).await {
                    Ok(token) => {
                        let price = token.price();
                        self.portfolio
                            .track(chat_id, &contract, PortfolioItem::token(&token_id, price));
                        format::tracking_token(&token_id, &contract, price)
                    }
                    Err(e) => {
                        warn!(chat_id, contract = %contract, error = %e, "track failed");
                        "Error tracking token. Please make sure the contract address and token ID are correct and try again.".to_string()
                    }
                }
            }

            Command::TrackCoin { contract } => match self.zora.get_coin(&contract).await {
                Ok(coin) => {
                    let price = coin.price();
                    self.portfolio.track(
                        chat_id,
                        &contract,
                        PortfolioItem::coin(coin.name.as_deref(), coin.symbol.as_deref(), price),
                    );
                    format::tracking_coin(&contract, price)
                }
                Err(e) => {
                    warn!(chat_id, contract = %contract, error = %e, "track coin failed");
                    "Error tracking coin. Please make sure the contract address is correct and try again.".to_string()
                }
            },

            Command::Portfolio => {
                let items = self.portfolio.items_for(chat_id);
                if items.is_empty() {
                    format::portfolio_empty()
                } else {
                    format::portfolio_view(&items)
                }
            }

            Command::AnalyzePortfolio => {
                let items = self.portfolio.items_for(chat_id);
                if items.is_empty() {
                    return format::portfolio_empty();
                }
                let snapshot: serde_json::Value = items
                    .iter()
                    .map(|(contract, item)| {
                        (contract.clone(), serde_json::json!(item))
                    })
                    .collect::<serde_json::Map<String, serde_json::Value>>()
                    .into();
                match self.ai.review_portfolio(&snapshot).await {
                    Ok(review) => format::ai_analysis("your portfolio", &review),
                    Err(e) => {
                        warn!(chat_id, error = %e, "portfolio review failed");
                        "Error analyzing portfolio. Please try again later.".to_string()
                    }
                }
            }

            Command::Analyze { contract, token_id } => {
                let token = match self.zora.get_token(&contract, &token_id).await {
                    Ok(token) => token,
                    Err(e) => {
                        warn!(chat_id, contract = %contract, error = %e, "analyze lookup failed");
                        return "Error analyzing token. Please make sure the contract address and token ID are correct and try again.".to_string();
                    }
                };
                let market_data = serde_json::json!(token);
                match self
                    .ai
                    .analyze_market_data(&format!("token {}", token_id), &market_data)
                    .await
                {
                    Ok(analysis) => format::ai_analysis(&format!("token {}", token_id), &analysis),
                    Err(e) => {
                        warn!(chat_id, contract = %contract, error = %e, "ai analysis failed");
                        "Error analyzing token. Please make sure the contract address and token ID are correct and try again.".to_string()
                    }
                }
            }

            Command::AnalyzeCoin { contract } => match self.zora.get_coin(&contract).await {
                Ok(coin) => {
                    let analysis = analyze_coin(&coin);
                    format::coin_analysis_report(&contract, &coin, &analysis)
                }
                Err(e) => {
                    warn!(chat_id, contract = %contract, error = %e, "analyze coin failed");
                    "Error analyzing coin. Please make sure the contract address is correct and try again.".to_string()
                }
            },

            Command::Trade { contract, token_id } => {
                match self.zora.get_token(&contract, &token_id).await {
                    Ok(token) => {
                        let analysis = analyze_token(&token);
                        format::token_trading_report(&token_id, &token, &analysis)
                    }
                    Err(e) => {
                        warn!(chat_id, contract = %contract, error = %e, "trade analysis failed");
                        "Error generating trading analysis. Please make sure the contract address and token ID are correct and try again.".to_string()
                    }
                }
            }

            Command::TradeCoin { contract } => match self.zora.get_coin(&contract).await {
                Ok(coin) => {
                    let analysis = analyze_coin(&coin);
                    format::trade_recommendations(&contract, &analysis)
                }
                Err(e) => {
                    warn!(chat_id, contract = %contract, error = %e, "trade generation failed");
                    "Error generating trade. Please make sure the contract address is correct and try again.".to_string()
                }
            },

            Command::TradingAnalysisCoin { contract } => {
                match self.zora.get_coin(&contract).await {
                    Ok(coin) => {
                        let analysis = analyze_coin(&coin);
                        format::coin_trading_report(&contract, &coin, &analysis)
                    }
                    Err(e) => {
                        warn!(chat_id, contract = %contract, error = %e, "trading analysis failed");
                        "Error generating trading analysis. Please make sure the contract address is correct and try again.".to_string()
                    }
                }
            }

            Command::Signals => match self.zora.trading_signals(10).await {
                Ok(signals) => {
                    let mut reply = format::signals_list(&signals);
                    if !signals.is_empty() {
                        let coins: Vec<_> = signals.iter().map(|(c, _)| c).collect();
                        match self
                            .ai
                            .trading_signals("today's top gainers", &serde_json::json!(coins))
                            .await
                        {
                            Ok(commentary) => {
                                reply.push_str("\n\nAI view:\n");
                                reply.push_str(&commentary);
                            }
                            // The tagged list is still useful on its own.
                            Err(e) => warn!(chat_id, error = %e, "signal commentary failed"),
                        }
                    }
                    reply
                }
                Err(e) => {
                    warn!(chat_id, error = %e, "signals lookup failed");
                    "Error fetching trading signals. Please try again later.".to_string()
                }
            },

            Command::Alert {
                contract,
                target_price,
            } => {
                self.alerts.add_alert(chat_id, &contract, target_price);
                format::alert_set(&contract, target_price)
            }

            Command::Alerts => {
                let alerts = self.alerts.alerts_for(chat_id);
                if alerts.is_empty() {
                    format::alerts_empty()
                } else {
                    format::alerts_list(&alerts)
                }
            }

            Command::RemoveAlert { contract } => {
                self.alerts.remove_alert(chat_id, &contract);
                format::alert_removed(&contract)
            }
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.text.trim();
        if !text.starts_with('/') {
            return Ok(HandlerResponse::Continue);
        }

        let command = match Command::parse(text) {
            Ok(command) => command,
            Err(e) => return Ok(HandlerResponse::Reply(rejection_text(&e))),
        };

        let reply = self.execute(message.chat.id, command).await;
        Ok(HandlerResponse::Reply(reply))
    }
}

fn rejection_text(err: &HandlerError) -> String {
    match err {
        HandlerError::InvalidAddress(_) => {
            "Invalid contract address. Please provide a valid Ethereum address.".to_string()
        }
        HandlerError::InvalidPrice(raw) => {
            format!("Invalid price: {}. Please provide a non-negative number.", raw)
        }
        HandlerError::MissingArgument(name) => {
            format!("Missing argument: <{}>. Send /start for usage.", name)
        }
        HandlerError::UnknownCommand(name) => {
            format!("Unknown command /{}. Send /start for the list of commands.", name)
        }
        HandlerError::NoText => "Please send a text command.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_texts_name_the_problem() {
        assert!(rejection_text(&HandlerError::InvalidAddress("0x1".into()))
            .contains("Invalid contract address"));
        assert!(rejection_text(&HandlerError::InvalidPrice("-2".into())).contains("-2"));
        assert!(rejection_text(&HandlerError::MissingArgument("price")).contains("<price>"));
        assert!(rejection_text(&HandlerError::UnknownCommand("moon".into())).contains("/moon"));
    }
}
