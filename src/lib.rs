//! Pokedex server
//!
//! A REST JSON API exposing CRUD operations over an in-memory collection of
//! Pokemon stat sheets loaded once from a static file at startup.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{PokemonStore, Repository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire the service layer over `store`
    pub fn new(config: AppConfig, store: Arc<dyn PokemonStore>) -> Self {
        let repository = Repository::new(store);
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
