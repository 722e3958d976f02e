//! OpenAPI documentation configuration.

use stratus_core::{ErrorResponse, OverallStatus, UserId};
use stratus_service::{
    CreateUserRequest, HealthChecks, HealthReport, MessageResponse, StatsResponse, UpdateUserRequest,
    UserListResponse, UserMessageResponse, UserResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Stratus API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stratus API",
        version = "0.1.0",
        description = "User CRUD backed by PostgreSQL with a Redis read-through cache",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        crate::controllers::stats_controller::get_stats,
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            UserId,
            ErrorResponse,
            OverallStatus,
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            UserListResponse,
            UserMessageResponse,
            MessageResponse,
            StatsResponse,
            HealthChecks,
            HealthReport,
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "stats", description = "Aggregate statistics"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in ["/api/users", "/api/users/{id}", "/api/stats", "/health"] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }
}
