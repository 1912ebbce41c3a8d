use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` deadline argument.
pub fn parse_deadline(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| format!("invalid deadline '{raw}' (expected YYYY-MM-DD): {error}"))
}

#[cfg(test)]
mod tests {
    use super::parse_deadline;

    #[test]
    fn parses_iso_date() {
        let date = parse_deadline("2024-05-01").expect("deadline should parse");
        assert_eq!(date.to_string(), "2024-05-01");
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(parse_deadline(" 2024-05-01 ").is_ok());
    }

    #[test]
    fn rejects_other_layouts() {
        let err = parse_deadline("01/05/2024").expect_err("should fail");
        assert!(err.contains("expected YYYY-MM-DD"));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_deadline("2024-02-30").is_err());
    }
}
