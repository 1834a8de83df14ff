use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database::manager;
use crate::handlers::{protected, public};
use crate::middleware::bearer_auth_middleware;
use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes (token acquisition)
        .merge(public_routes())
        // Protected API, gated by the bearer middleware
        .merge(protected_routes(&state))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

fn protected_routes(state: &AppState) -> Router<AppState> {
    use protected::{auth, items};

    Router::new()
        // Session management for authenticated users
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::user))
        // Item resource
        .route("/items", get(items::index).post(items::store))
        .route(
            "/items/:id",
            get(items::show)
                .put(items::update)
                .patch(items::update)
                .delete(items::destroy),
        )
        // route_layer so unknown paths fall through to 404 instead of 401
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            bearer_auth_middleware,
        ))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "data": {
            "name": "Items API (Rust)",
            "version": version,
            "description": "Token-authenticated items CRUD API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "register": "POST /register (public - token acquisition)",
                "login": "POST /login (public - token acquisition)",
                "logout": "POST /logout (protected)",
                "user": "GET /user (protected)",
                "items": "/items[/:id] (protected)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let database = match &state.db {
        Some(pool) => manager::health_check(pool).await.map(|_| "ok"),
        None => Ok("not configured"),
    };

    match database {
        Ok(database) => (
            StatusCode::OK,
            Json(json!({
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": database,
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "message": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string(),
                }
            })),
        ),
    }
}
