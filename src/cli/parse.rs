use chrono::{DateTime, Utc};
use quill_core::format::OutputFormat;

/// Parse an output format name
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse an RFC 3339 publish timestamp
pub fn parse_publish(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    quill_core::post::parse_timestamp(s).map_err(|e| e.to_string())
}
