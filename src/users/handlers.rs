use axum::{extract::State, http::StatusCode, routing::any, Json, Router};
use tracing::{error, info, instrument};

use crate::{
    state::AppState,
    users::{
        dto::{DeleteResponse, UserInput},
        extractors::{JsonBody, UserIdParam},
        password::hash_password_blocking,
        repo_types::{CreateUserParams, UpdateUserParams, User},
    },
};

// Routes accept any method; dispatch is by path only.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", any(list_users))
        .route("/createUser", any(create_user))
        .route("/updateUser/", any(missing_user_id))
        .route("/updateUser/:id", any(update_user))
        .route("/updateUser/:id/*rest", any(malformed_path))
        .route("/deleteUser/", any(missing_user_id))
        .route("/deleteUser/:id", any(delete_user))
        .route("/deleteUser/:id/*rest", any(malformed_path))
}

async fn missing_user_id() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, "Invalid user ID")
}

async fn malformed_path() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, "Invalid URL path")
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    let users = state.store.get_users().await.map_err(|e| {
        error!(error = %e, "get_users failed");
        internal("Unable to fetch users")
    })?;
    Ok(Json(users))
}

#[instrument(skip(state, input))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UserInput>,
) -> Result<Json<User>, (StatusCode, String)> {
    let password = hash(input.password).await?;

    let params = CreateUserParams {
        name: input.name,
        email: input.email,
        password,
    };

    let user = state.store.create_user(params).await.map_err(|e| {
        error!(error = %e, "create_user failed");
        internal("Unable to create user")
    })?;

    info!(user_id = user.id, "user created");
    Ok(Json(user))
}

#[instrument(skip(state, input))]
pub async fn update_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
    JsonBody(input): JsonBody<UserInput>,
) -> Result<Json<User>, (StatusCode, String)> {
    let password = hash(input.password).await?;

    let params = UpdateUserParams {
        id,
        name: input.name,
        email: input.email,
        password,
    };

    let user = state.store.update_user(params).await.map_err(|e| {
        error!(error = %e, user_id = id, "update_user failed");
        internal("Unable to update user")
    })?;

    info!(user_id = user.id, "user updated");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
) -> Result<(StatusCode, Json<DeleteResponse>), (StatusCode, String)> {
    state.store.delete_user(id).await.map_err(|e| {
        error!(error = %e, user_id = id, "delete_user failed");
        internal("Unable to delete user")
    })?;

    info!(user_id = id, "user deleted");
    Ok((StatusCode::OK, Json(DeleteResponse::success())))
}

async fn hash(plain: String) -> Result<String, (StatusCode, String)> {
    hash_password_blocking(plain).await.map_err(|e| {
        error!(error = %e, "hash_password failed");
        internal("Unable to hash password")
    })
}

fn internal(msg: &str) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string())
}
