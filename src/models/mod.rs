//! Data models for the Pokedex

pub mod pokemon;

// Re-export commonly used types
pub use pokemon::{Pokemon, TotalPokemons};
