//! # ai-client
//!
//! Chat-completion wrapper used for natural-language market commentary:
//! market-data analysis, trading signals, and portfolio review. Prompts
//! embed the market data as JSON and ask for a short actionable summary.

use std::sync::Arc;

use async_openai::{
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::debug;

const SYSTEM_PROMPT: &str =
    "You are a professional crypto trading analyst. Provide concise, actionable insights.";
const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.7;

#[derive(Clone)]
pub struct AiClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    model: String,
}

impl AiClient {
    pub fn new(api_key: String, model: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Arc::new(Client::with_config(config)),
            model,
        }
    }

    /// Points the client at a different API base (tests, proxies).
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            model,
        }
    }

    /// Summarizes market data for one coin or token.
    pub async fn analyze_market_data(
        &self,
        subject: &str,
        market_data: &serde_json::Value,
    ) -> anyhow::Result<String> {
        self.complete(&market_analysis_prompt(subject, market_data))
            .await
    }

    /// Generates trading signals from historical or current list data.
    pub async fn trading_signals(
        &self,
        subject: &str,
        data: &serde_json::Value,
    ) -> anyhow::Result<String> {
        self.complete(&trading_signals_prompt(subject, data)).await
    }

    /// Reviews a portfolio snapshot.
    pub async fn review_portfolio(&self, portfolio: &serde_json::Value) -> anyhow::Result<String> {
        self.complete(&portfolio_prompt(portfolio)).await
    }

    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_PROMPT)
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(MAX_TOKENS)
            .temperature(TEMPERATURE)
            .build()?;

        let response = self.client.chat().create(request).await?;
        debug!(model = %self.model, "chat completion finished");

        if let Some(choice) = response.choices.first() {
            Ok(choice.message.content.clone().unwrap_or_default())
        } else {
            anyhow::bail!("No response from the model")
        }
    }
}

fn market_analysis_prompt(subject: &str, market_data: &serde_json::Value) -> String {
    format!(
        "Analyze the following market data for {subject}: {market_data}\n\
         Provide a concise analysis including:\n\
         1. Current market sentiment\n\
         2. Key price levels\n\
         3. Potential trading opportunities\n\
         4. Risk factors\n\
         Keep the analysis clear and actionable."
    )
}

fn trading_signals_prompt(subject: &str, data: &serde_json::Value) -> String {
    format!(
        "Based on the following data for {subject}: {data}\n\
         Generate trading signals including:\n\
         1. Entry points\n\
         2. Exit points\n\
         3. Stop loss levels\n\
         4. Risk management suggestions\n\
         Keep the signals clear and specific."
    )
}

fn portfolio_prompt(portfolio: &serde_json::Value) -> String {
    format!(
        "Analyze the following portfolio: {portfolio}\n\
         Provide insights including:\n\
         1. Portfolio diversification\n\
         2. Risk assessment\n\
         3. Performance analysis\n\
         4. Optimization suggestions\n\
         Keep the analysis practical and actionable."
    )
}
