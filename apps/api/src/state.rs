use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::recommendation::Recommender;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one in-memory session. Never persisted.
    pub session: Arc<Mutex<Session>>,
    /// Default: GeminiRecommender.
    pub recommender: Arc<dyn Recommender>,
    pub config: Config,
}

impl AppState {
    pub fn new(recommender: Arc<dyn Recommender>, config: Config) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            recommender,
            config,
        }
    }
}
