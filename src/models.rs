use chrono::{DateTime, Utc};
use serde::Deserialize;

// Query string of GET /data. The field is optional so a bare request
// still deserializes and the presence check happens in the handler.
#[derive(Debug, Deserialize)]
pub struct ReadingQuery {
    pub tds: Option<String>
}

// A single sensor reading. Lives for one request: stamped on arrival,
// handed to the diagnostic logger, then dropped.
#[derive(Debug)]
pub struct Reading {
    pub value: String,
    pub received_at: DateTime<Utc>
}

impl Reading {
    pub fn new(value: String) -> Self {

        Reading {
            value,
            received_at: Utc::now()
        }

    }
}
