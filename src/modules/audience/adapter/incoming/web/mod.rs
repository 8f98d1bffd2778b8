pub mod routes;

/// Store timestamps are nanoseconds since the epoch; the panel wants them
/// human-readable.
pub(crate) fn format_timestamp_ns(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp_nanos(timestamp).to_rfc3339()
}
