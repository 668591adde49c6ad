use tracing::debug;

use super::gemini::{Content, GenerativeModel, ModelError, Role};
use super::session::ChatSession;
use crate::message::ChatTurn;

impl Role {
    /// Map a caller-supplied sender label onto the model's role vocabulary.
    ///
    /// Only `"user"` is a user turn; every other label is a model turn.
    pub fn from_sender(sender: &str) -> Self {
        match sender {
            "user" => Role::User,
            "assistant" | "model" | "bot" => Role::Model,
            other => {
                debug!(sender = %other, "Unrecognized sender, treating as model turn");
                Role::Model
            }
        }
    }
}

/// Turn the caller's history into role-tagged contents, keeping the order.
pub fn normalize_history(history: &[ChatTurn]) -> Vec<Content> {
    history
        .iter()
        .map(|turn| Content::text(Role::from_sender(&turn.sender), turn.text.clone()))
        .collect()
}

/// Open a fresh session seeded with `history` and ask it for a reply to `user_msg`.
pub async fn generate_reply(
    model: &dyn GenerativeModel,
    history: &[ChatTurn],
    user_msg: &str,
) -> Result<String, ModelError> {
    let mut session = ChatSession::start(model, normalize_history(history));
    debug!(model = %model.model_name(), history_len = history.len(), "Starting chat session");
    session.send_message(user_msg).await
}
