//! Repository layer for pokemon storage

pub mod pokemons;

use std::sync::Arc;

use crate::{error::AppResult, models::Pokemon};

pub use pokemons::InMemoryPokemonStore;

/// Storage operations the service layer relies on.
///
/// Keys are the store's lookup ids. A stored record's own `id` field is not
/// required to match its key.
pub trait PokemonStore: Send + Sync {
    fn count(&self) -> AppResult<usize>;

    /// All records in key iteration order
    fn list(&self) -> AppResult<Vec<Pokemon>>;

    fn get(&self, id: i64) -> AppResult<Pokemon>;

    /// Store `pokemon` under `pokemon.id`; fails with `Conflict` if taken
    fn insert(&self, pokemon: Pokemon) -> AppResult<Pokemon>;

    /// Overwrite the record at `id`; fails with `NotFound` if absent
    fn replace(&self, id: i64, pokemon: Pokemon) -> AppResult<Pokemon>;

    /// Remove and return the record at `id`
    fn delete(&self, id: i64) -> AppResult<Pokemon>;
}

/// Main repository struct holding the pokemon store
#[derive(Clone)]
pub struct Repository {
    pub pokemons: Arc<dyn PokemonStore>,
}

impl Repository {
    /// Create a new repository with the given store
    pub fn new(pokemons: Arc<dyn PokemonStore>) -> Self {
        Self { pokemons }
    }
}
