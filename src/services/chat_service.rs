// ============================================================================
// CHAT SERVICE - Generative-language calls for the chatbot widget
// ============================================================================
// The key is compiled in from .env; for production this would be proxied
// through the backend instead of being shipped to the client.
// ============================================================================

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::utils::GEMINI_API_KEY;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ChatPart {
    pub text: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ChatMessage {
    pub role: String,
    pub parts: Vec<ChatPart>,
}

impl ChatMessage {
    pub fn user(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![ChatPart { text: text.to_string() }],
        }
    }

    pub fn model(text: &str) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![ChatPart { text: text.to_string() }],
        }
    }

    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ChatMessage,
}

/// Send the running transcript and return the model's reply.
pub async fn send_chat(history: &[ChatMessage]) -> Result<String, String> {
    if GEMINI_API_KEY.is_empty() {
        return Err("Chatbot is not configured (missing GEMINI_API_KEY).".to_string());
    }

    let url = format!("{}?key={}", GEMINI_ENDPOINT, GEMINI_API_KEY);
    let response = Request::post(&url)
        .json(&GenerateRequest { contents: history })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let result = response
        .json::<GenerateResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    result
        .candidates
        .into_iter()
        .next()
        .map(|c| c.content.text())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| "Unexpected response structure".to_string())
}
