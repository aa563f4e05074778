//! Date display formatting.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::error::{KitError, Result};

/// Day, abbreviated month, full year: `05 Jan 2024`.
pub const DEFAULT_DATE_PATTERN: &str = "%d %b %Y";

/// Format `date` as `dd MMM yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DEFAULT_DATE_PATTERN).to_string()
}

/// Format `date` with a strftime `pattern`.
///
/// Unlike `NaiveDate::format`, an invalid pattern is reported as an error
/// instead of panicking when the result is displayed.
pub fn format_date_with(date: NaiveDate, pattern: &str) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(KitError::Parse {
            message: format!("Invalid date pattern: {}", pattern),
            help: Some("Use strftime specifiers such as %d %b %Y".to_string()),
        });
    }
    Ok(date.format_with_items(items.into_iter()).to_string())
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| KitError::Parse {
        message: format!("Invalid date '{}': {}", s, e),
        help: Some("Use YYYY-MM-DD".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 1, 5)), "05 Jan 2024");
        assert_eq!(format_date(date(1999, 12, 31)), "31 Dec 1999");
    }

    #[test]
    fn test_format_date_with() {
        assert_eq!(format_date_with(date(2024, 3, 9), "%Y/%m/%d").unwrap(), "2024/03/09");
        assert!(format_date_with(date(2024, 3, 9), "%Q").is_err());
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date(" 2024-02-29 ").unwrap(), date(2024, 2, 29));
        assert!(parse_iso_date("2023-02-29").is_err());
        assert!(parse_iso_date("yesterday").is_err());
    }
}
