pub mod auth;
pub mod error;
pub mod handlers;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use axum::{
    extract::FromRef,
    http::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use dm_common::DriverRecord;

use auth::AuthConfig;
use handlers::{health, search};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub auth: AuthConfig,
}

pub struct AppState {
    /// Roster snapshot in original order; also the reset view.
    pub roster: Vec<DriverRecord>,
    pub config: AppConfig,
    pub readiness: Arc<AtomicBool>,
}

pub type SharedState = Arc<AppState>;

impl FromRef<SharedState> for AuthConfig {
    fn from_ref(input: &SharedState) -> AuthConfig {
        input.config.auth.clone()
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static(auth::API_KEY_HEADER),
        ])
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let api_routes = Router::new()
        .route("/drivers", get(search::list_drivers))
        .route("/drivers/search", post(search::search_drivers));

    Router::new()
        .route("/livez", get(health::livez))
        .route("/readyz", get(health::readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// State over the built-in demo roster, for router and handler tests.
pub fn test_state(api_key: &str) -> SharedState {
    use dm_common::roster::{RosterProvider, StaticRoster};

    let roster = StaticRoster::demo()
        .fetch_all()
        .expect("demo roster is valid");

    Arc::new(AppState {
        roster,
        config: AppConfig {
            port: 0,
            cors_origins: vec!["http://localhost:3000".into()],
            auth: AuthConfig {
                api_key: api_key.to_string(),
            },
        },
        readiness: Arc::new(AtomicBool::new(true)),
    })
}
