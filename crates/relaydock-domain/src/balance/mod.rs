/// 500,000 raw quota units equal one dollar on new-api style providers.
pub const QUOTA_DIVISOR: f64 = 500_000.0;

/// Convert a raw provider quota into dollars, rounded to cents.
pub fn quota_to_dollars(raw_quota: f64) -> f64 {
    (raw_quota / QUOTA_DIVISOR * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_divisor_value() {
        assert_eq!(QUOTA_DIVISOR, 500_000.0);
    }

    #[test]
    fn quota_conversion() {
        assert_eq!(quota_to_dollars(1_000_000.0), 2.0);
        assert_eq!(quota_to_dollars(250_000.0), 0.5);
        assert_eq!(quota_to_dollars(0.0), 0.0);
    }
}
