//! Display formatting for chain values

use chrono::{DateTime, Utc};
use stikman_shared::constants::TREASURY_DECIMALS;

/// Formats an integer amount of the smallest unit as a decimal string.
///
/// Trailing zeros of the fraction are dropped but at least one fractional
/// digit is kept, so one whole unit renders as `"1.0"`. With `decimals == 0`
/// the integer is returned unchanged.
pub fn format_units(amount: i128, decimals: u32) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();

    if decimals == 0 {
        return format!("{}{}", sign, magnitude);
    }

    let Some(scale) = 10u128.checked_pow(decimals) else {
        // More decimals than an i128 can hold: the whole part is zero.
        let digits = magnitude.to_string();
        let padded = format!("{:0>width$}", digits, width = decimals as usize);
        return format!("{}0.{}", sign, trim_fraction(&padded));
    };

    let whole = magnitude / scale;
    let fraction = format!(
        "{:0>width$}",
        magnitude % scale,
        width = decimals as usize
    );
    format!("{}{}.{}", sign, whole, trim_fraction(&fraction))
}

fn trim_fraction(fraction: &str) -> &str {
    let trimmed = fraction.trim_end_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Treasury balance in whole XLM
pub fn format_treasury(stroops: i128) -> String {
    format_units(stroops, TREASURY_DECIMALS)
}

/// Ledger timestamp as a UTC date-time, if it is representable
pub fn to_datetime(timestamp: u64) -> Option<DateTime<Utc>> {
    i64::try_from(timestamp)
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
}

pub fn format_timestamp(timestamp: u64) -> String {
    match to_datetime(timestamp) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{} (ledger seconds)", timestamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_unit_is_one_point_zero() {
        assert_eq!(format_treasury(10_000_000), "1.0");
        assert_eq!(format_units(1_000_000_000_000_000_000, 18), "1.0");
    }

    #[test]
    fn test_representative_amounts() {
        assert_eq!(format_treasury(0), "0.0");
        assert_eq!(format_treasury(1), "0.0000001");
        assert_eq!(format_treasury(5_000_000), "0.5");
        assert_eq!(format_treasury(12_345_678), "1.2345678");
        assert_eq!(format_treasury(100_000_000_000), "10000.0");
        assert_eq!(format_treasury(-25_000_000), "-2.5");
    }

    #[test]
    fn test_no_precision_loss_at_extremes() {
        assert_eq!(
            format_units(i128::MAX, 7),
            "17014118346046923173168730371588.4105727"
        );
        assert_eq!(
            format_units(i128::MIN, 7),
            "-17014118346046923173168730371588.4105728"
        );
    }

    #[test]
    fn test_zero_decimals_keeps_integer() {
        assert_eq!(format_units(42, 0), "42");
        assert_eq!(format_units(-42, 0), "-42");
    }

    #[test]
    fn test_decimals_beyond_i128_range() {
        assert_eq!(format_units(5, 40), "0.0000000000000000000000000000000000000005");
        assert_eq!(format_units(0, 40), "0.0");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20 UTC");
        assert_eq!(format_timestamp(u64::MAX), "18446744073709551615 (ledger seconds)");
    }
}
