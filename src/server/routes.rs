//! Router assembly for the roster HTTP surface

use super::handlers::{
    AppState, create_student, delete_student, get_student, health_check, list_students,
    update_student,
};
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the student routes:
/// - POST   /student        - Create a student
/// - GET    /student        - List all students
/// - GET    /student/{id}   - Get a specific student
/// - PUT    /student/{id}   - Update a student
/// - DELETE /student/{id}   - Delete a student
pub fn build_student_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/student",
            axum::routing::post(create_student).get(list_students),
        )
        .route(
            "/student/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .with_state(state)
}

/// Build health check routes.
fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Build the full application router with request tracing and CORS.
pub fn build_router(state: AppState) -> Router {
    health_routes()
        .merge(build_student_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
