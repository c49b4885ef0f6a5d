//! Date and number formatting for tables and detail screens

use chrono::{DateTime, Utc};

/// `15.03.2024`
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// `15.03.2024 14:02`
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

pub fn format_opt_datetime(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

/// Thousands separated by spaces, fixed number of decimals
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    // -0.00 prints as 0.00
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_money(value: f64) -> String {
    format_number(value, 2)
}

pub fn format_money_with_code(value: f64, code: &str) -> String {
    if code.is_empty() {
        format_money(value)
    } else {
        format!("{} {}", format_money(value), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_dates() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(&dt), "15.03.2024");
        assert_eq!(format_datetime(&dt), "15.03.2024 14:02");
        assert_eq!(format_opt_datetime(None), "-");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.567, 0), "1 235");
        assert_eq!(format_number(1234.567, 2), "1 234.57");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1_000.0, 0), "1 000");
        assert_eq!(format_money(1234567.891), "1 234 567.89");
        assert_eq!(format_money(-1234.5), "-1 234.50");
        assert_eq!(format_money(-0.001), "0.00");
    }

    #[test]
    fn test_money_with_code() {
        assert_eq!(format_money_with_code(1500.0, "UZS"), "1 500.00 UZS");
        assert_eq!(format_money_with_code(1500.0, ""), "1 500.00");
    }
}
