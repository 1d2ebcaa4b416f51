use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::person;
use crate::person::{Person, PersonService};
use crate::store::{MemoryStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub persons: PersonService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store<Person, i64>>) -> Self {
        Self {
            persons: PersonService::new(store),
        }
    }

    /// State backed by a fresh in-memory store, optionally pre-seeded.
    pub fn in_memory(seed: Vec<Person>) -> Self {
        Self::new(Arc::new(MemoryStore::with_entities(seed)))
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Versioned API: one service, thin per-version routing
        .nest("/api/v1", person_routes())
        .nest("/api/v2", person_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/person", get(person::list).post(person::create))
        .route("/person/filter", get(person::find))
        .route(
            "/person/:id",
            get(person::get).put(person::upsert).delete(person::delete),
        )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Person API",
            "version": version,
            "description": "Versioned CRUD over a Person collection with query filtering",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "list": "GET /api/v1/person",
                "filter": "GET /api/v1/person/filter?name=&likesChocolate=&maxResults=",
                "get": "GET /api/v1/person/:id",
                "create": "POST /api/v1/person",
                "upsert": "PUT /api/v1/person/:id",
                "delete": "DELETE /api/v1/person/:id",
                "versions": ["/api/v1", "/api/v2"],
            }
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now()
        }
    }))
}
