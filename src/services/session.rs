// src/services/session.rs
use std::fmt::Debug;

use super::gemini::{Content, GenerativeModel, ModelError};

/// A conversation opened against a model for a single exchange.
///
/// Nothing outlives the request: the session is built from the caller's
/// history, used, and dropped.
pub struct ChatSession<'a> {
    model: &'a dyn GenerativeModel,
    history: Vec<Content>,
}

impl Debug for ChatSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("model", &self.model.model_name())
            .field("history_len", &self.history.len())
            .finish()
    }
}

impl<'a> ChatSession<'a> {
    pub fn start(model: &'a dyn GenerativeModel, history: Vec<Content>) -> Self {
        Self { model, history }
    }

    /// Send `text` as the newest user turn and return the model's reply.
    ///
    /// The exchange is only recorded in the history once the model answered.
    /// Keeping the reply costs one clone per call, even though the relay
    /// drops the session right after.
    pub async fn send_message(&mut self, text: &str) -> Result<String, ModelError> {
        self.history.push(Content::user(text));

        match self.model.generate_content(&self.history).await {
            Ok(reply) => {
                self.history.push(Content::model(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                self.history.pop();
                Err(e)
            }
        }
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }
}
