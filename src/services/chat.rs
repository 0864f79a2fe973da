//! Chat reply service.
//!
//! Stateless: each message is answered on its own, no conversation state.
//! With a completion API key configured the message is forwarded to the
//! model; on any failure of that call, or with no key at all, the reply
//! falls back to keyword-matched canned responses.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ChatSettings;
use crate::error::{AppError, AppResult};

/// HTTP connect timeout for completion API calls.
const HTTP_CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);
/// HTTP total timeout for completion API calls.
const HTTP_REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Instructions sent with every forwarded message.
const SYSTEM_PROMPT: &str = "You are the shopping assistant for Yaritu, a jewellery \
store. Answer briefly and helpfully about products, pricing, offers and orders.";

/// Canned reply for greetings.
pub const GREETING_REPLY: &str = "Hello! Welcome to Yaritu. How can we help you today?";
/// Canned reply for price questions.
pub const PRICE_REPLY: &str = "Our jewellery prices are listed on each product page. \
For a bespoke quote, leave your details on the contact page and we will get back to you.";
/// Canned reply for offer questions.
pub const OFFER_REPLY: &str = "All current offers are on the home page. Sign up to the \
newsletter so you never miss a sale.";

// Keyword groups, checked in this order. Greeting wins over price wins over
// offer when a message matches more than one group.
const GREETING_KEYWORDS: &[&str] = &["hi", "hello", "hey"];
const PRICE_KEYWORDS: &[&str] = &["price", "cost"];
const OFFER_KEYWORDS: &[&str] = &["offer", "discount", "sale"];

/// Chat reply service.
pub struct ChatService {
    settings: ChatSettings,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Deserialize)]
struct CompletionChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionChoiceMessage,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

impl ChatService {
    /// Create a new chat service from configuration.
    pub fn new(settings: ChatSettings) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(HTTP_CONNECT_TIMEOUT)
            .timeout(HTTP_REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client for chat");

        Self { settings, http }
    }

    /// Answer a message. Never fails: any completion problem degrades to a
    /// canned reply.
    pub async fn reply(&self, message: &str) -> String {
        if let Some(api_key) = &self.settings.api_key {
            match self.complete(api_key.expose_secret(), message).await {
                Ok(reply) => return reply,
                Err(e) => {
                    warn!("Chat completion failed, using canned reply: {}", e);
                }
            }
        }

        canned_reply(message)
    }

    async fn complete(&self, api_key: &str, message: &str) -> AppResult<String> {
        let request = CompletionRequest {
            model: &self.settings.model,
            messages: vec![
                CompletionMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                CompletionMessage {
                    role: "user",
                    content: message,
                },
            ],
        };

        let url = format!(
            "{}/chat/completions",
            self.settings.api_base.trim_end_matches('/')
        );

        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Completion API returned status {}",
                response.status()
            )));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid completion response: {}", e)))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::Upstream("Completion response had no choices".to_string()))
    }
}

/// Keyword-matched canned reply, case-insensitive substring checks in a
/// fixed order: greeting, then price, then offer, then an acknowledgment
/// echo of the message.
pub fn canned_reply(message: &str) -> String {
    let lower = message.to_lowercase();
    let matches_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if matches_any(GREETING_KEYWORDS) {
        GREETING_REPLY.to_string()
    } else if matches_any(PRICE_KEYWORDS) {
        PRICE_REPLY.to_string()
    } else if matches_any(OFFER_KEYWORDS) {
        OFFER_REPLY.to_string()
    } else {
        format!(
            "You said: \"{}\". Our team will get back to you shortly.",
            message.trim()
        )
    }
}
