// src/state.rs
use std::sync::Arc;

use crate::services::gemini::GenerativeModel;

pub type SharedState = Arc<AppState>;

/// Built once at startup and never mutated afterwards.
///
/// `model` is `None` when the client could not be configured; the server
/// still runs and answers every chat call with an error.
pub struct AppState {
    pub model: Option<Arc<dyn GenerativeModel>>,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model: Some(model) }
    }

    pub fn uninitialized() -> Self {
        Self { model: None }
    }
}
