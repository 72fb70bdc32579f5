use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::UserResult;
use crate::models::{CreateUser, DeletedUserResponse, UpdateUser, UserResponse};
use crate::service::UserService;

/// OpenAPI tag for all user endpoints
pub const TAG: &str = "users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, get_user, get_all_users, update_user, delete_user),
    components(schemas(CreateUser, UpdateUser, UserResponse, DeletedUserResponse)),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Router for the user endpoints; the service is shared behind an `Arc`
pub fn router(service: UserService) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(get_user)
                .post(create_user)
                .put(update_user)
                .delete(delete_user),
        )
        .route("/all", get(get_all_users))
        .with_state(shared_service)
}

/// Query parameter selecting the user to operate on
#[derive(Debug, Deserialize, IntoParams)]
pub struct UserIdQuery {
    /// User id
    pub user_id: i64,
}

/// Create a user
///
/// POST /user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 422, description = "Name or surname failed validation"),
        (status = 503, description = "Database rejected the write")
    )
)]
async fn create_user(
    State(service): State<Arc<UserService>>,
    Json(input): Json<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Fetch a user by id
///
/// GET /user?user_id=1
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "No user with that id")
    )
)]
async fn get_user(
    State(service): State<Arc<UserService>>,
    Query(query): Query<UserIdQuery>,
) -> UserResult<Json<UserResponse>> {
    let user = service.get_user(query.user_id).await?;
    Ok(Json(user))
}

/// List all users
///
/// GET /user/all
#[utoipa::path(
    get,
    path = "/all",
    tag = TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>)
    )
)]
async fn get_all_users(
    State(service): State<Arc<UserService>>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.get_all_users().await?;
    Ok(Json(users))
}

/// Update a user's fields
///
/// PUT /user?user_id=1
#[utoipa::path(
    put,
    path = "",
    tag = TAG,
    params(UserIdQuery),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "No user with that id"),
        (status = 422, description = "Validation failed or no fields supplied"),
        (status = 503, description = "Database rejected the write")
    )
)]
async fn update_user(
    State(service): State<Arc<UserService>>,
    Query(query): Query<UserIdQuery>,
    Json(changes): Json<UpdateUser>,
) -> UserResult<Json<UserResponse>> {
    let user = service.update_user(query.user_id, changes).await?;
    Ok(Json(user))
}

/// Delete a user by id
///
/// DELETE /user?user_id=1
#[utoipa::path(
    delete,
    path = "",
    tag = TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "User deleted", body = DeletedUserResponse),
        (status = 404, description = "No user with that id")
    )
)]
async fn delete_user(
    State(service): State<Arc<UserService>>,
    Query(query): Query<UserIdQuery>,
) -> UserResult<Json<DeletedUserResponse>> {
    let deleted = service.delete_user(query.user_id).await?;
    Ok(Json(deleted))
}
