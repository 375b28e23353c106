use std::sync::atomic::{AtomicI64, Ordering};

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a timestamp-derived order token.
///
/// Tokens are the decimal string of a Unix-millis value, kept strictly
/// increasing within the process by an atomic high-water mark: if two
/// orders land in the same millisecond, the second token is `last + 1`.
/// Tokens therefore sort chronologically and never collide in-process.
/// Cross-process collisions remain possible and are accepted - the store
/// is single-writer in normal use.
pub fn order_token() -> String {
    static LAST: AtomicI64 = AtomicI64::new(0);
    let now = now_millis();
    let mut prev = LAST.load(Ordering::Relaxed);
    loop {
        let next = if now > prev { now } else { prev + 1 };
        match LAST.compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next.to_string(),
            Err(actual) => prev = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_tokens_are_distinct_and_increasing() {
        let tokens: Vec<String> = (0..64).map(|_| order_token()).collect();
        for pair in tokens.windows(2) {
            let a: i64 = pair[0].parse().unwrap();
            let b: i64 = pair[1].parse().unwrap();
            assert!(b > a, "token {} should be greater than {}", b, a);
        }
    }

    #[test]
    fn order_token_tracks_wall_clock() {
        let before = now_millis();
        let token: i64 = order_token().parse().unwrap();
        assert!(token >= before);
    }
}
