use std::sync::Arc;

use flashcards_core::daily_limit::DailyLimit;
use handlebars::TemplateError;

use crate::config::ServerConfig;
use crate::pages::Pages;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: flashcards_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Live daily set-creation limit, seeded from `config.daily_limit`.
    pub daily_limit: Arc<DailyLimit>,
    /// Compiled page templates.
    pub pages: Arc<Pages>,
}

impl AppState {
    /// Fails only if a bundled page template does not compile.
    pub fn new(pool: flashcards_db::DbPool, config: ServerConfig) -> Result<Self, TemplateError> {
        let daily_limit = Arc::new(DailyLimit::new(config.daily_limit));
        Ok(Self {
            pool,
            config: Arc::new(config),
            daily_limit,
            pages: Arc::new(Pages::new()?),
        })
    }
}
