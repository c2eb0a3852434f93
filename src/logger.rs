use std::fs::OpenOptions;
use std::io::Write;
use crate::models::Reading;

pub fn log_reading(reading: &Reading) {
    let timestamp = reading.received_at.format("%Y-%m-%d %H:%M:%S");
    let log_entry = format!(
        "{} | {:8} | tds={}\n",
        timestamp, "accepted", reading.value
    );

    // Use /app/readings.log in Docker, ./readings.log locally
    let log_path = std::env::var("LOG_PATH")
        .unwrap_or_else(|_| "./readings.log".to_string());

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(log_entry.as_bytes());
    } else {
        eprintln!("Failed to write to log file: {}", log_path);
    }
}
