use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
mod password;
mod repo;
mod repo_types;
mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::user_routes())
        .merge(handlers::login_routes())
}
