// ============================================================================
// Send Reading Example
// ============================================================================
//
// This is a simplified implementation for demonstration purposes.
// It plays the part of the sensor firmware: sends one TDS reading to a
// running ingest service and prints the acknowledgment.
//
// Usage: cargo run --example send_reading -- 450
//
// ============================================================================

use reqwest::Client;

#[tokio::main]
async fn main() {

    let value = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "450".to_string());

    let client = Client::new();

    let response = client
        .get("http://127.0.0.1:5005/data")
        .query(&[("tds", value.as_str())])
        .send()
        .await
        .expect("Failed to reach the ingest service");

    let status = response.status();
    let body = response.text().await.expect("Failed to read response body");

    println!("{} -> {}", status, body);

}
