//! In-memory pokemon store

use std::{
    fs,
    path::Path,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use indexmap::{map::Entry, IndexMap};

use super::PokemonStore;
use crate::{
    error::{AppError, AppResult, LoadError},
    models::Pokemon,
};

/// Insertion-ordered id -> pokemon map guarded by a read/write lock.
#[derive(Debug, Default)]
pub struct InMemoryPokemonStore {
    entries: RwLock<IndexMap<i64, Pokemon>>,
}

impl InMemoryPokemonStore {
    /// Build a store keyed by 1-based position, ignoring each entry's own id.
    pub fn from_pokemons(pokemons: Vec<Pokemon>) -> Self {
        let entries = (1..).zip(pokemons).collect::<IndexMap<i64, Pokemon>>();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Load the startup snapshot from a JSON array file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = path.display().to_string();

        let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: file.clone(),
            source,
        })?;
        let pokemons: Vec<Pokemon> = serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
            path: file.clone(),
            source,
        })?;

        tracing::debug!("Parsed {} pokemons from {}", pokemons.len(), file);
        Ok(Self::from_pokemons(pokemons))
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, IndexMap<i64, Pokemon>>> {
        self.entries
            .read()
            .map_err(|_| AppError::Internal("pokemon store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, IndexMap<i64, Pokemon>>> {
        self.entries
            .write()
            .map_err(|_| AppError::Internal("pokemon store lock poisoned".to_string()))
    }
}

impl PokemonStore for InMemoryPokemonStore {
    fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    fn list(&self) -> AppResult<Vec<Pokemon>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn get(&self, id: i64) -> AppResult<Pokemon> {
        self.read()?
            .get(&id)
            .cloned()
            .ok_or_else(AppError::pokemon_not_found)
    }

    fn insert(&self, pokemon: Pokemon) -> AppResult<Pokemon> {
        match self.write()?.entry(pokemon.id) {
            Entry::Occupied(_) => Err(AppError::pokemon_already_exists(pokemon.id)),
            Entry::Vacant(slot) => Ok(slot.insert(pokemon).clone()),
        }
    }

    fn replace(&self, id: i64, pokemon: Pokemon) -> AppResult<Pokemon> {
        let mut entries = self.write()?;
        let slot = entries.get_mut(&id).ok_or_else(AppError::pokemon_not_found)?;
        *slot = pokemon;
        Ok(slot.clone())
    }

    fn delete(&self, id: i64) -> AppResult<Pokemon> {
        // shift_remove keeps the iteration order of the remaining entries
        self.write()?
            .shift_remove(&id)
            .ok_or_else(AppError::pokemon_not_found)
    }
}
