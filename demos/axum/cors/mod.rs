use std::sync::Arc;

use cors_gate::{Cors, CorsOptions, ValidationError};

pub type SharedGate = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub gate: SharedGate,
}

/// The reference ticket-API policy: scope `/api/**`, the two local dev
/// frontends, credentials on, one hour of preflight caching.
pub fn build_state() -> Result<AppState, ValidationError> {
    let gate = Arc::new(Cors::new(CorsOptions::default())?);

    Ok(AppState { gate })
}

pub mod middleware;
