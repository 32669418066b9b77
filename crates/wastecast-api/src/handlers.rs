//! HTTP handlers.
//!
//! Successful predictions are returned as a bare JSON object. Failures use a
//! `{"error": "..."}` body.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, warn};

use wastecast_core::Query;

use crate::ApiState;

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(msg: &str, status: StatusCode) -> impl IntoResponse {
    (
        status,
        Json(ErrorBody {
            error: msg.to_string(),
        }),
    )
}

/// POST /predict
pub async fn predict(
    State(state): State<ApiState>,
    body: Result<Json<Query>, JsonRejection>,
) -> impl IntoResponse {
    let query = match body {
        Ok(Json(query)) => query,
        Err(rejection) => {
            // Content-type problems keep their 415; everything else is a bad request.
            let status = match rejection {
                JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                _ => StatusCode::BAD_REQUEST,
            };
            let msg = rejection.body_text();
            warn!(%status, error = %msg, "rejected prediction request");
            return error_response(&msg, status).into_response();
        }
    };

    let prediction = state.dataset.predict(&query);
    info!(
        menu_type = %query.menu_type,
        attendance = query.attendance,
        level = %prediction.waste_level,
        "prediction served"
    );
    Json(prediction).into_response()
}

/// GET /health
pub async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "records": state.dataset.len(),
        "menu_types": state.dataset.menu_types(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use wastecast_core::{Dataset, HistoricalRecord, WasteLevel};

    fn test_state() -> ApiState {
        ApiState {
            dataset: Dataset::from_records(vec![
                HistoricalRecord::new("veg", 50, WasteLevel::Low),
                HistoricalRecord::new("veg", 200, WasteLevel::High),
            ]),
        }
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn predict_closest_match() {
        let query = Query::new(120, "veg");
        let resp = predict(State(test_state()), Ok(Json(query))).await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["waste_level"], "low");
        assert_eq!(json["waste_kg"], "1.80");
        assert_eq!(json["waste_percentage"], 5);
        assert_eq!(
            json["suggestion"],
            "Predicted low waste. Adjust food preparation accordingly."
        );
    }

    #[tokio::test]
    async fn predict_unknown_menu_is_medium() {
        let query = Query::new(100, "special");
        let resp = predict(State(test_state()), Ok(Json(query))).await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["waste_level"], "medium");
        assert_eq!(json["waste_kg"], "4.50");
        assert_eq!(json["waste_percentage"], 15);
    }

    #[tokio::test]
    async fn health_reports_dataset() {
        let resp = health(State(test_state())).await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["records"], 2);
        assert_eq!(json["menu_types"], serde_json::json!(["veg"]));
    }
}
