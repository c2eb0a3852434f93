// ============================================================================
// Simple Server Example
// ============================================================================
//
// This is a simplified implementation for demonstration purposes.
// It showcases the TDS ingest route on its own, without the shared
// counters or the diagnostic log file.
//
// ============================================================================

use axum::{routing::{get, Router}};
use axum::extract::Query;
use axum::http::StatusCode;
use serde::Deserialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[derive(Deserialize)]
struct ReadingQuery {
    tds: Option<String>
}

#[tokio::main]
async fn main() {

    // build our application with routes
    let app = Router::new().route("/data", get(ingest_reading));

    // run it
    let addr: SocketAddr = ([0, 0, 0, 0], 5005).into();
    let listener = TcpListener::bind(addr).await.unwrap();
    println!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();

}

async fn ingest_reading(Query(query): Query<ReadingQuery>) -> Result<String, (StatusCode, String)> {

    match query.tds.filter(|v| !v.is_empty()) {
        Some(value) => {
            println!("Received TDS value: {}", value);
            Ok(format!("TDS value {} received successfully.", value))
        }
        None => Err((StatusCode::BAD_REQUEST, "No TDS value provided.".to_string()))
    }

}
