//! API integration tests

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use pokedex_server::{
    api, config::AppConfig, models::Pokemon, repository::InMemoryPokemonStore, AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn bulbasaur() -> Value {
    json!({
        "id": 1,
        "name": "Bulbasaur",
        "types": ["Grass", "Poison"],
        "total": 318,
        "hp": 45,
        "attack": 49,
        "defense": 49,
        "attack_special": 65,
        "defense_special": 65,
        "speed": 45,
        "evolutionId": null
    })
}

fn app_with(seed: Vec<Value>) -> Router {
    let pokemons: Vec<Pokemon> = seed
        .into_iter()
        .map(|value| serde_json::from_value(value).expect("Invalid seed pokemon"))
        .collect();
    let store = InMemoryPokemonStore::from_pokemons(pokemons);
    let state = AppState::new(AppConfig::default(), Arc::new(store));
    api::create_router(state).expect("Failed to build router")
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

#[tokio::test]
async fn test_bulbasaur_scenario() {
    let app = app_with(vec![bulbasaur()]);

    let (status, body) = send(&app, Method::GET, "/total-pokemons", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total": 1 }));

    let (status, body) = send(&app, Method::GET, "/pokemon/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, bulbasaur());

    let (status, body) = send(&app, Method::GET, "/pokemon/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Pokemon not found." }));

    let (status, body) = send(&app, Method::POST, "/pokemon/", Some(bulbasaur())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "detail": "Pokemon with id : 1 already exist." }));

    let mut ekans = bulbasaur();
    ekans["id"] = json!(2);
    ekans["name"] = json!("Ekans");
    ekans["types"] = json!(["Poison"]);
    let (status, body) = send(&app, Method::POST, "/pokemon/", Some(ekans.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ekans);

    let (status, body) = send(&app, Method::GET, "/types", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Grass", "Poison"]));

    let (status, body) = send(&app, Method::DELETE, "/pokemon/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, bulbasaur());

    let (status, _) = send(&app, Method::GET, "/pokemon/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/total-pokemons", None).await;
    assert_eq!(body, json!({ "total": 1 }));
}

#[tokio::test]
async fn test_list_matches_total() {
    let mut charmander = bulbasaur();
    charmander["id"] = json!(4);
    charmander["name"] = json!("Charmander");
    charmander["types"] = json!(["Fire"]);
    let app = app_with(vec![bulbasaur(), charmander]);

    let (status, list) = send(&app, Method::GET, "/pokemons", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().expect("List is not an array").clone();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1]["name"], "Charmander");

    let (_, total) = send(&app, Method::GET, "/total-pokemons", None).await;
    assert_eq!(total["total"], list.len());

    // Loaded entries are keyed by position, not by their own id
    let (status, body) = send(&app, Method::GET, "/pokemon/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 4);
}

#[tokio::test]
async fn test_update() {
    let app = app_with(vec![bulbasaur()]);

    let mut ivysaur = bulbasaur();
    ivysaur["name"] = json!("Ivysaur");
    ivysaur["total"] = json!(405);
    ivysaur["evolutionId"] = json!(3);

    let (status, body) = send(&app, Method::PUT, "/pokemon/1", Some(ivysaur.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ivysaur);

    let (_, body) = send(&app, Method::GET, "/pokemon/1", None).await;
    assert_eq!(body, ivysaur);

    let (status, body) = send(&app, Method::PUT, "/pokemon/9", Some(ivysaur)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Pokemon not found.");

    let (_, total) = send(&app, Method::GET, "/total-pokemons", None).await;
    assert_eq!(total["total"], 1);
}

#[tokio::test]
async fn test_delete_missing() {
    let app = app_with(vec![bulbasaur()]);

    let (status, body) = send(&app, Method::DELETE, "/pokemon/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Pokemon not found.");
}

#[tokio::test]
async fn test_invalid_path_id() {
    let app = app_with(vec![bulbasaur()]);

    for uri in ["/pokemon/0", "/pokemon/-3", "/pokemon/abc"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "GET {}", uri);
        assert!(body["detail"].is_string());

        let (status, _) = send(&app, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "DELETE {}", uri);
    }

    let (status, _) = send(&app, Method::PUT, "/pokemon/0", Some(bulbasaur())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_invalid_body() {
    let app = app_with(Vec::new());

    let mut missing_field = bulbasaur();
    missing_field.as_object_mut().unwrap().remove("hp");
    let (status, _) = send(&app, Method::POST, "/pokemon/", Some(missing_field)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let mut extra_field = bulbasaur();
    extra_field["legendary"] = json!(false);
    let (status, _) = send(&app, Method::POST, "/pokemon/", Some(extra_field)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let mut bad_id = bulbasaur();
    bad_id["id"] = json!(0);
    let (status, _) = send(&app, Method::POST, "/pokemon/", Some(bad_id)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let mut empty_name = bulbasaur();
    empty_name["name"] = json!("");
    let (status, _) = send(&app, Method::POST, "/pokemon/", Some(empty_name)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, total) = send(&app, Method::GET, "/total-pokemons", None).await;
    assert_eq!(total["total"], 0);
}

#[tokio::test]
async fn test_create_without_trailing_slash() {
    let app = app_with(Vec::new());

    let (status, body) = send(&app, Method::POST, "/pokemon", Some(bulbasaur())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bulbasaur");
}

#[tokio::test]
async fn test_types_sorted_and_unique() {
    let mut pidgey = bulbasaur();
    pidgey["types"] = json!(["Normal", "Flying"]);
    let mut oddish = bulbasaur();
    oddish["types"] = json!(["Grass", "Poison"]);
    let app = app_with(vec![bulbasaur(), pidgey, oddish]);

    let (status, body) = send(&app, Method::GET, "/types", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Flying", "Grass", "Normal", "Poison"]));
}

#[tokio::test]
async fn test_health_and_docs() {
    let app = app_with(vec![bulbasaur()]);

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["pokemons"], 1);

    let (status, body) = send(&app, Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/pokemon/{id}"].is_object());
    assert!(body["paths"]["/types"].is_object());
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let app = app_with(Vec::new());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/pokemons")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app.oneshot(request).await.expect("Failed to send request");

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "DELETE"
    );
}

#[tokio::test]
async fn test_cors_rejects_other_origin() {
    let app = app_with(Vec::new());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/pokemons")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app.oneshot(request).await.expect("Failed to send request");

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_update_invalid_body_leaves_store_unchanged() {
    let app = app_with(vec![bulbasaur()]);

    let mut missing_field = bulbasaur();
    missing_field.as_object_mut().unwrap().remove("attack");
    let (status, body) = send(&app, Method::PUT, "/pokemon/1", Some(missing_field)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let mut empty_name = bulbasaur();
    empty_name["name"] = json!("");
    let (status, body) = send(&app, Method::PUT, "/pokemon/1", Some(empty_name)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, body) = send(&app, Method::GET, "/pokemon/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, bulbasaur());
}

#[tokio::test]
async fn test_create_without_content_type() {
    let app = app_with(Vec::new());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/pokemon/")
        .body(Body::from(bulbasaur().to_string()))
        .expect("Failed to build request");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let (_, total) = send(&app, Method::GET, "/total-pokemons", None).await;
    assert_eq!(total["total"], 0);
}

#[tokio::test]
async fn test_startup_config_loads_shipped_data() {
    let config = AppConfig::load().expect("Failed to load configuration");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(&config.data.path);
    let store = InMemoryPokemonStore::load(&path).expect("Failed to load shipped data");
    let state = AppState::new(config, Arc::new(store));
    let app = api::create_router(state).expect("Failed to build router");

    let (_, total) = send(&app, Method::GET, "/total-pokemons", None).await;
    let total = total["total"].as_u64().expect("No total");
    assert!(total > 0);

    let (status, first) = send(&app, Method::GET, "/pokemon/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, list) = send(&app, Method::GET, "/pokemons", None).await;
    assert_eq!(list[0], first);

    let (status, _) = send(&app, Method::GET, &format!("/pokemon/{}", total + 1), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
