//! Pokemon API endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{Pokemon, TotalPokemons},
    AppState,
};

use super::{PokemonId, ValidatedJson};

/// Number of pokemons in the store
#[utoipa::path(
    get,
    path = "/total-pokemons",
    tag = "pokemons",
    responses(
        (status = 200, description = "Pokemon count", body = TotalPokemons)
    )
)]
pub async fn total_pokemons(State(state): State<AppState>) -> AppResult<Json<TotalPokemons>> {
    let total = state.services.pokemons.count()?;
    Ok(Json(TotalPokemons { total }))
}

/// List all pokemons
#[utoipa::path(
    get,
    path = "/pokemons",
    tag = "pokemons",
    responses(
        (status = 200, description = "Every stored pokemon, in store order", body = Vec<Pokemon>)
    )
)]
pub async fn list_pokemons(State(state): State<AppState>) -> AppResult<Json<Vec<Pokemon>>> {
    let pokemons = state.services.pokemons.list()?;
    Ok(Json(pokemons))
}

/// Get pokemon by ID
#[utoipa::path(
    get,
    path = "/pokemon/{id}",
    tag = "pokemons",
    params(("id" = i64, Path, description = "Pokemon key (>= 1)")),
    responses(
        (status = 200, description = "Pokemon details", body = Pokemon),
        (status = 404, description = "Pokemon not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid id", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_pokemon(
    State(state): State<AppState>,
    PokemonId(id): PokemonId,
) -> AppResult<Json<Pokemon>> {
    let pokemon = state.services.pokemons.get_by_id(id)?;
    Ok(Json(pokemon))
}

/// Create a pokemon, stored under its own id
#[utoipa::path(
    post,
    path = "/pokemon/",
    tag = "pokemons",
    request_body = Pokemon,
    responses(
        (status = 200, description = "Pokemon created", body = Pokemon),
        (status = 409, description = "Id already taken", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_pokemon(
    State(state): State<AppState>,
    ValidatedJson(pokemon): ValidatedJson<Pokemon>,
) -> AppResult<Json<Pokemon>> {
    let pokemon = state.services.pokemons.create(pokemon)?;
    Ok(Json(pokemon))
}

/// Replace the pokemon stored at `id`
#[utoipa::path(
    put,
    path = "/pokemon/{id}",
    tag = "pokemons",
    params(("id" = i64, Path, description = "Pokemon key (>= 1)")),
    request_body = Pokemon,
    responses(
        (status = 200, description = "Pokemon updated", body = Pokemon),
        (status = 404, description = "Pokemon not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid id or body", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_pokemon(
    State(state): State<AppState>,
    PokemonId(id): PokemonId,
    ValidatedJson(pokemon): ValidatedJson<Pokemon>,
) -> AppResult<Json<Pokemon>> {
    let pokemon = state.services.pokemons.update(id, pokemon)?;
    Ok(Json(pokemon))
}

/// Delete a pokemon and return it
#[utoipa::path(
    delete,
    path = "/pokemon/{id}",
    tag = "pokemons",
    params(("id" = i64, Path, description = "Pokemon key (>= 1)")),
    responses(
        (status = 200, description = "Deleted pokemon", body = Pokemon),
        (status = 404, description = "Pokemon not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid id", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_pokemon(
    State(state): State<AppState>,
    PokemonId(id): PokemonId,
) -> AppResult<Json<Pokemon>> {
    let pokemon = state.services.pokemons.delete(id)?;
    Ok(Json(pokemon))
}

/// Sorted list of every type label in use
#[utoipa::path(
    get,
    path = "/types",
    tag = "pokemons",
    responses(
        (status = 200, description = "Distinct type labels, ascending", body = Vec<String>)
    )
)]
pub async fn list_types(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let types = state.services.pokemons.distinct_types()?;
    Ok(Json(types))
}
