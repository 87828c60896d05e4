use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{ChartError, ChartResult};

pub fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!(
            "{field_name} must be finite"
        )))
    }
}

/// Milliseconds since the Unix epoch at midnight UTC of `date`.
pub fn date_to_timestamp_ms(date: NaiveDate) -> ChartResult<f64> {
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
        ChartError::InvalidData(format!("date {date} has no representable midnight"))
    })?;
    Ok(midnight.and_utc().timestamp_millis() as f64)
}

pub fn timestamp_ms_to_datetime(timestamp_ms: f64) -> ChartResult<NaiveDateTime> {
    let timestamp_ms = ensure_finite(timestamp_ms, "timestamp")?;
    let millis = timestamp_ms.round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(ChartError::InvalidData(
            "timestamp is out of range".to_owned(),
        ));
    }

    DateTime::from_timestamp_millis(millis as i64)
        .map(|datetime| datetime.naive_utc())
        .ok_or_else(|| ChartError::InvalidData("timestamp is out of range".to_owned()))
}

/// Renders a pixel coordinate with at most six decimals and no trailing zeros.
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    let mut text = format!("{value:.6}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}

/// Inserts `,` between groups of three integer digits.
#[must_use]
pub fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_coordinate_trims_trailing_zeros() {
        assert_eq!(format_coordinate(12.5), "12.5");
        assert_eq!(format_coordinate(420.0), "420");
        assert_eq!(format_coordinate(-0.0000001), "0");
        assert_eq!(format_coordinate(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn group_thousands_handles_sign_and_fraction() {
        assert_eq!(group_thousands("7000000000"), "7,000,000,000");
        assert_eq!(group_thousands("-1234.50"), "-1,234.50");
        assert_eq!(group_thousands("999"), "999");
    }

    #[test]
    fn timestamp_round_trip_at_year_start() {
        let date = NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date");
        let ms = date_to_timestamp_ms(date).expect("timestamp");
        let back = timestamp_ms_to_datetime(ms).expect("datetime");
        assert_eq!(back.date(), date);
    }
}
