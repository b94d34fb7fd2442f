use utoipa::OpenApi;

/// Top-level OpenAPI document: the users API nested at its mount point.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory API",
        description = "CRUD service for user records with an in-memory store"
    ),
    nest(
        (path = "/users", api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;
