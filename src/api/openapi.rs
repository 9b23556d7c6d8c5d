//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, pokemons};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pokedex API",
        version = "1.0.0",
        description = "In-memory Pokemon stat sheet REST API"
    ),
    paths(
        health::health_check,
        pokemons::total_pokemons,
        pokemons::list_pokemons,
        pokemons::get_pokemon,
        pokemons::create_pokemon,
        pokemons::update_pokemon,
        pokemons::delete_pokemon,
        pokemons::list_types,
    ),
    components(
        schemas(
            crate::models::pokemon::Pokemon,
            crate::models::pokemon::TotalPokemons,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "pokemons", description = "Pokemon stat sheets")
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, raw document at `/openapi.json`
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}
