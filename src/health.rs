use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub message: String,
    pub db_status: &'static str,
}

/// Root route: always 200, with `dbStatus` reflecting a live probe of the
/// store connection.
#[instrument(skip(state))]
pub async fn root(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_status = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };
    Json(HealthResponse {
        message: "storefront API is running".into(),
        db_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_uses_camel_case() {
        let resp = HealthResponse {
            message: "ok".into(),
            db_status: "connected",
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"dbStatus\":\"connected\""));
        assert!(json.contains("\"message\":\"ok\""));
    }
}
