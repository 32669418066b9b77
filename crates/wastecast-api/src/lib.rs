//! wastecast-api — HTTP API for waste prediction.
//!
//! Provides axum route handlers over a read-only [`Dataset`] loaded once at
//! startup. Handlers never mutate the dataset, so the state is shared
//! without locks.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | POST | `/predict` | Estimate waste level and quantity |
//! | GET | `/health` | Liveness plus dataset summary |

pub mod handlers;

use axum::Router;
use axum::routing::{get, post};
use wastecast_core::Dataset;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub dataset: Dataset,
}

/// Build the API router.
pub fn build_router(dataset: Dataset) -> Router {
    let state = ApiState { dataset };

    Router::new()
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health))
        .with_state(state)
}
