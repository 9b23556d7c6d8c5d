//! Pokemon model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Pokemon stat sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Pokemon {
    #[validate(range(min = 1, message = "Pokemon id must be a positive integer"))]
    pub id: i64,
    #[validate(length(min = 1, message = "Pokemon name must not be empty"))]
    pub name: String,
    /// Elemental type labels, usually one or two
    pub types: Vec<String>,
    /// Sum of the six base stats (not enforced)
    pub total: i32,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub attack_special: i32,
    pub defense_special: i32,
    pub speed: i32,
    /// Id of the pokemon this one evolves into, if any
    #[serde(rename = "evolutionId", default)]
    pub evolution_id: Option<i64>,
}

/// Number of pokemons currently in the store
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TotalPokemons {
    pub total: usize,
}
