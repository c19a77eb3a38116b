// src/state.rs
use std::sync::Arc;

use crate::services::generator::TextGenerator;

pub type SharedState = Arc<AppState>;

/// Immutable after startup; shared by every request.
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn shared(generator: Arc<dyn TextGenerator>) -> SharedState {
        Arc::new(Self::new(generator))
    }
}
