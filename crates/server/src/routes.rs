use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::AppServices;

pub mod appointments;
pub mod auth;
pub mod loyalty;
pub mod profiles;
pub mod reviews;

pub type AppState = Arc<AppServices>;

pub async fn health(State(services): State<AppState>) -> Json<Health> {
    Json(Health { status: "ok", storage: services.mode.as_str() })
}

/// Build the full application router.
pub fn build_router(services: AppState, cors: CorsLayer) -> Router {
    let accounts: Router<AppState> = Router::new()
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login))
        .route("/api/usuarios/criar", post(profiles::create_profile))
        .route("/api/usuarios/login", post(profiles::login_by_name))
        .route("/api/usuarios/:id", get(profiles::get_profile));

    let bookings: Router<AppState> = Router::new()
        .route("/api/agendamentos", post(appointments::create).get(appointments::list))
        .route("/api/agendamentos/:id", delete(appointments::delete))
        .route("/api/reviews", get(reviews::list).post(reviews::create));

    let rewards: Router<AppState> = Router::new()
        .route("/api/fidelities/adjust", post(loyalty::adjust))
        .route("/api/fidelities/:user_id/cancel", post(loyalty::cancel));

    Router::new()
        .route("/health", get(health))
        .merge(accounts)
        .merge(bookings)
        .merge(rewards)
        .with_state(services)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
