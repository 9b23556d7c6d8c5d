//! Pokemon service

use std::collections::BTreeSet;

use crate::{
    error::{AppError, AppResult},
    models::Pokemon,
    repository::Repository,
};

#[derive(Clone)]
pub struct PokemonsService {
    repository: Repository,
}

impl PokemonsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn count(&self) -> AppResult<usize> {
        self.repository.pokemons.count()
    }

    pub fn list(&self) -> AppResult<Vec<Pokemon>> {
        self.repository.pokemons.list()
    }

    pub fn get_by_id(&self, id: i64) -> AppResult<Pokemon> {
        let result = self.repository.pokemons.get(id);
        if let Err(AppError::NotFound(_)) = result {
            tracing::debug!("Pokemon {} not found", id);
        }
        result
    }

    pub fn create(&self, pokemon: Pokemon) -> AppResult<Pokemon> {
        let created = self.repository.pokemons.insert(pokemon)?;
        tracing::info!("Created pokemon {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Replace the pokemon stored at `id`. The body's own id is kept as-is,
    /// so it may differ from the key it is stored under.
    pub fn update(&self, id: i64, pokemon: Pokemon) -> AppResult<Pokemon> {
        if pokemon.id != id {
            tracing::warn!(
                "Pokemon stored at key {} now carries id {}",
                id,
                pokemon.id
            );
        }
        let updated = self.repository.pokemons.replace(id, pokemon)?;
        tracing::info!("Updated pokemon {} ({})", id, updated.name);
        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> AppResult<Pokemon> {
        let deleted = self.repository.pokemons.delete(id)?;
        tracing::info!("Deleted pokemon {} ({})", id, deleted.name);
        Ok(deleted)
    }

    /// Every type label used by any stored pokemon, deduplicated and sorted
    pub fn distinct_types(&self) -> AppResult<Vec<String>> {
        let pokemons = self.repository.pokemons.list()?;
        let types: BTreeSet<String> = pokemons.into_iter().flat_map(|p| p.types).collect();
        Ok(types.into_iter().collect())
    }
}
