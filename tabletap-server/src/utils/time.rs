//! Time helpers

pub use shared::util::{now_millis, order_token};

/// Format a Unix-millis timestamp for logs (UTC, RFC 3339)
pub fn format_millis(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| millis.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_timestamp() {
        let formatted = format_millis(0);
        assert!(formatted.starts_with("1970-01-01T00:00:00"));
    }
}
