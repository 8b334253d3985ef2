use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use saboteur_core::model::SaboteurScore;

use crate::error::NarrativeError;

/// Static coaching text shown when the narrative collaborator is
/// unavailable, errors, or returns nothing. Result presentation must never
/// block on the collaborator.
pub const FALLBACK_ANALYSIS: &str = "## ☕ Coffee Break\n\n\
The coach is currently taking a quick break (or ran into a connection error).\n\n\
**Quick Tip:** Take a deep breath! Your top saboteur is just a voice in your head, not the truth.";

#[derive(Clone, Debug)]
pub struct NarrativeConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl NarrativeConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("SABOTEUR_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("SABOTEUR_AI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("SABOTEUR_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Client for the AI-coach collaborator.
///
/// Consumes the ranked `(saboteur, score)` pairs a finished assessment
/// produces and returns a freeform Markdown narrative. The session machine
/// never depends on this service; its failures stay here.
#[derive(Clone)]
pub struct NarrativeService {
    client: Client,
    config: Option<NarrativeConfig>,
}

impl NarrativeService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(NarrativeConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<NarrativeConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Generate a coaching narrative for the ranked top saboteurs.
    ///
    /// # Errors
    ///
    /// Returns `NarrativeError` when the service is disabled, the request
    /// fails, or the response is empty.
    pub async fn analyze(&self, top: &[SaboteurScore]) -> Result<String, NarrativeError> {
        let config = self.config.as_ref().ok_or(NarrativeError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(top),
            }],
            temperature: 0.7,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NarrativeError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(NarrativeError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }

    /// Like [`analyze`](Self::analyze), but never fails: any collaborator
    /// error is logged and replaced by [`FALLBACK_ANALYSIS`].
    pub async fn analyze_or_fallback(&self, top: &[SaboteurScore]) -> String {
        match self.analyze(top).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                tracing::warn!("narrative generation returned empty text, using fallback");
                FALLBACK_ANALYSIS.to_string()
            }
            Err(err) => {
                tracing::warn!(error = %err, "narrative generation failed, using fallback");
                FALLBACK_ANALYSIS.to_string()
            }
        }
    }
}

fn build_prompt(top: &[SaboteurScore]) -> String {
    let saboteur_list = top
        .iter()
        .map(|s| format!("{} (Score: {})", s.saboteur, s.score))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are an expert Positive Intelligence coach with a fun, empathetic personality. \
The user has taken a saboteur assessment. Here are their top results: {saboteur_list}.\n\n\
Please provide a response in Markdown format with the following structure:\n\n\
## 🎭 Your Saboteur Profile\n\
A 2-3 sentence summary of how these specific saboteurs might collaborate to mess with the user's day. \
Be playful but insightful.\n\n\
## 💡 The Bright Side\n\
Explain one hidden strength behind their top saboteur (e.g., a Controller is also a natural leader).\n\n\
## 🛡️ Jedi Mind Trick\n\
One specific, actionable, and fun 10-second mental exercise to counter their top saboteur when it appears.\n\n\
Keep the tone light, colorful, and encouraging. Use emojis. Do not mention you are an AI. \
Speak as a real human coach."
    )
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
