//! API handlers for the Pokedex REST endpoints

pub mod health;
pub mod openapi;
pub mod pokemons;

use anyhow::Context;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use validator::Validate;

use crate::{config::CorsConfig, error::AppError, AppState};

/// Extractor for a `{id}` path segment that must be an integer >= 1
pub struct PokemonId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for PokemonId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        if id < 1 {
            return Err(AppError::Validation(format!(
                "Path parameter id must be greater than or equal to 1, got {}",
                id
            )));
        }

        Ok(PokemonId(id))
    }
}

/// JSON body extractor that also runs the body's `Validate` rules
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(ValidatedJson(value))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config.cors)?;

    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/total-pokemons", get(pokemons::total_pokemons))
        .route("/pokemons", get(pokemons::list_pokemons))
        .route("/pokemon/", post(pokemons::create_pokemon))
        .route("/pokemon", post(pokemons::create_pokemon))
        .route(
            "/pokemon/:id",
            get(pokemons::get_pokemon)
                .put(pokemons::update_pokemon)
                .delete(pokemons::delete_pokemon),
        )
        .route("/types", get(pokemons::list_types))
        .with_state(state);

    Ok(Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v.trim() == "*")
}

/// Build the CORS layer. Wildcards are mirrored from the request when
/// credentials are allowed, since browsers reject a literal `*` then.
pub fn cors_layer(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let credentials = config.allow_credentials;

    let origins = if is_wildcard(&config.allowed_origins) {
        if credentials {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::any()
        }
    } else {
        let origins = config
            .allowed_origins
            .iter()
            // Browsers never send a trailing slash in Origin
            .map(|origin| origin.trim().trim_end_matches('/'))
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("invalid CORS origin '{}'", origin))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    let methods = if is_wildcard(&config.allowed_methods) {
        if credentials {
            AllowMethods::mirror_request()
        } else {
            AllowMethods::any()
        }
    } else {
        let methods = config
            .allowed_methods
            .iter()
            .map(|method| {
                Method::from_bytes(method.trim().to_uppercase().as_bytes())
                    .with_context(|| format!("invalid CORS method '{}'", method))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowMethods::list(methods)
    };

    let headers = if is_wildcard(&config.allowed_headers) {
        if credentials {
            AllowHeaders::mirror_request()
        } else {
            AllowHeaders::any()
        }
    } else {
        let headers = config
            .allowed_headers
            .iter()
            .map(|header| {
                HeaderName::from_bytes(header.trim().as_bytes())
                    .with_context(|| format!("invalid CORS header '{}'", header))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowHeaders::list(headers)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(credentials))
}
