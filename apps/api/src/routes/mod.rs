pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::dashboard::handlers as dashboard;
use crate::onboarding::handlers as onboarding;
use crate::quiz::handlers as quiz;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Role catalog
        .route("/api/v1/roles", get(onboarding::handle_get_roles))
        .route(
            "/api/v1/roles/:role_name/skills",
            get(onboarding::handle_get_role_skills),
        )
        // Accounts
        .route("/api/v1/users", post(onboarding::handle_create_user))
        .route("/api/v1/auth/login", post(onboarding::handle_login))
        .route("/api/v1/users/:id", get(onboarding::handle_get_user))
        .route(
            "/api/v1/users/:id/skills",
            get(onboarding::handle_get_user_skills).post(onboarding::handle_add_user_skills),
        )
        .route(
            "/api/v1/users/:id/progress",
            get(onboarding::handle_get_user_progress),
        )
        // Dashboard and the skill toggle
        .route(
            "/api/v1/users/:id/dashboard",
            get(dashboard::handle_get_dashboard),
        )
        .route(
            "/api/v1/users/:id/progress/:skill",
            put(dashboard::handle_mark_complete).delete(dashboard::handle_mark_incomplete),
        )
        // Generated roadmap + resources
        .route("/api/v1/users/:id/roadmap", get(roadmap::handle_get_roadmap))
        .route(
            "/api/v1/skills/:skill/resources",
            get(roadmap::handle_get_resources),
        )
        // Skill-verification quiz
        .route("/api/v1/skills/:skill/quiz", get(quiz::handle_get_quiz))
        .route(
            "/api/v1/skills/:skill/quiz/answers",
            post(quiz::handle_grade_quiz),
        )
        .with_state(state)
}
