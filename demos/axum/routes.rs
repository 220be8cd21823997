use axum::Json;
use axum::response::IntoResponse;

pub async fn list_tickets() -> impl IntoResponse {
    Json(vec![
        "TICKET-1: printer on fire",
        "TICKET-2: coffee machine offline",
    ])
}

/// Lives outside the `/api/**` scope; the gate leaves it untouched.
pub async fn health() -> impl IntoResponse {
    "ok"
}
