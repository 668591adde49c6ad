// src/message.rs
use serde::{Deserialize, Serialize};

/// One turn of the caller's conversation as the frontend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatTurn {
    pub sender: String,
    pub text: String,
}

impl ChatTurn {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self { sender: sender.into(), text: text.into() }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub history: Vec<ChatTurn>,
}

// `"history": null` is treated the same as an omitted history.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ChatTurn>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<ChatTurn>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
