//! Business logic services

pub mod pokemons;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub pokemons: pokemons::PokemonsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            pokemons: pokemons::PokemonsService::new(repository),
        }
    }
}
