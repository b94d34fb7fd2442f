use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::ErrorResponse;
use email::Notifier;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, delete_user),
    components(schemas(User, CreateUser, ErrorResponse)),
    tags(
        (name = "Users", description = "User directory endpoints (in-memory)")
    )
)]
pub struct ApiDoc;

/// Shared state for the users router: the service plus the outbound
/// notification capability.
struct UsersState<R: UserRepository> {
    service: UserService<R>,
    notifier: Arc<dyn Notifier>,
}

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(
    service: UserService<R>,
    notifier: Arc<dyn Notifier>,
) -> Router {
    let state = Arc::new(UsersState { service, notifier });

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).delete(delete_user))
        .with_state(state)
}

/// List all users in creation order
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    )
)]
async fn list_users<R: UserRepository>(
    State(state): State<Arc<UsersState<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = state.service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing or empty field, or email already taken", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(state): State<Arc<UsersState<R>>>,
    Json(input): Json<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = state.service.create_user(input).await?;

    // Welcome email is fire-and-forget: the creation is already committed
    // and the response must not wait on (or fail with) the notifier.
    let notifier = Arc::clone(&state.notifier);
    let email = user.email.clone();
    tokio::spawn(async move {
        if let Err(e) = notifier.send_welcome(&email).await {
            tracing::warn!(to = %email, "Welcome notification failed: {}", e);
        }
    });

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by identifier
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with this identifier", body = ErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(state): State<Arc<UsersState<R>>>,
    Path(id): Path<u64>,
) -> UserResult<Json<User>> {
    let user = state.service.get_user(id).await?;
    Ok(Json(user))
}

/// Delete a user by identifier
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User identifier")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No user with this identifier", body = ErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(state): State<Arc<UsersState<R>>>,
    Path(id): Path<u64>,
) -> UserResult<impl IntoResponse> {
    state.service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
