//! API Routes

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))

        // Students
        .route("/students", get(handlers::list_students).post(handlers::create_student))

        // Instructors
        .route("/instructors", get(handlers::list_instructors).post(handlers::create_instructor))
        .route("/instructors/:id", get(handlers::get_instructor))

        // Courses (CRUD)
        .route("/courses", get(handlers::list_courses).post(handlers::create_course))
        .route(
            "/courses/:id",
            get(handlers::get_course)
                .put(handlers::update_course)
                .delete(handlers::delete_course),
        )

        // Enrollments
        .route("/enrollments", get(handlers::list_enrollments).post(handlers::enroll))

        // Audit trail
        .route("/audit", get(handlers::list_audit))

        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
