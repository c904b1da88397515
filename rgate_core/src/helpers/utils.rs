use chrono::Utc;

/// Epoch milliseconds at response construction. Every success envelope
/// carries this as its `timestamp` field.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse a `$0.001`-style price tag into atomic USDC units (6 decimals).
pub fn price_to_atomic_usdc(price: &str) -> Option<u64> {
    let usd: f64 = price.strip_prefix('$')?.parse().ok()?;
    if !usd.is_finite() || usd < 0.0 {
        return None;
    }
    Some((usd * 1_000_000.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_to_atomic_usdc() {
        assert_eq!(price_to_atomic_usdc("$0.001"), Some(1_000));
        assert_eq!(price_to_atomic_usdc("$0.01"), Some(10_000));
        assert_eq!(price_to_atomic_usdc("$1"), Some(1_000_000));
        assert_eq!(price_to_atomic_usdc("0.001"), None);
        assert_eq!(price_to_atomic_usdc("$abc"), None);
    }

    #[test]
    fn test_now_millis_is_epoch_scale() {
        // 2020-01-01 in millis
        assert!(now_millis() > 1_577_836_800_000);
    }
}
