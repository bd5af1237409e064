use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{
    CreateUserRequest, CreatedUserResponse, LoginRequest, LoginResponse, PublicUser, UserListItem,
};
use crate::users::services;

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user).get(list_users))
}

pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), ApiError> {
    let user = services::register(&state.db, payload).await?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            message: "user registered".into(),
            email: user.email,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = services::login(&state.db, payload).await?;
    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        message: "login successful".into(),
        user: PublicUser {
            name: user.name,
            email: user.email,
        },
    }))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserListItem>>, ApiError> {
    let users = services::list(&state.db).await?;
    let items = users
        .into_iter()
        .map(|u| UserListItem {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
        })
        .collect();
    Ok(Json(items))
}
