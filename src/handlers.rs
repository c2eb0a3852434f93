use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use crate::AppState;
use crate::logger::log_reading;
use crate::metrics::CountersSnapshot;
use crate::models::{Reading, ReadingQuery};

pub async fn health_check() -> &'static str {

    "OK"

}

pub async fn ingest_reading(
    State(state): State<AppState>,
    Query(query): Query<ReadingQuery>
) -> Result<String, (StatusCode, String)> {

    // An empty ?tds= counts as absent, same as no parameter at all
    let value = match query.tds.filter(|v| !v.is_empty()) {
        Some(value) => value,
        None => {
            state.metrics.record_rejected();
            return Err((StatusCode::BAD_REQUEST, "No TDS value provided.".to_string()));
        }
    };

    println!("Received TDS value: {}", value);

    let reading = Reading::new(value);

    state.metrics.record_accepted();
    log_reading(&reading);

    Ok(format!("TDS value {} received successfully.", reading.value))

}

pub async fn counters_snapshot(State(state): State<AppState>) -> Json<CountersSnapshot> {

    Json(state.metrics.snapshot())

}
