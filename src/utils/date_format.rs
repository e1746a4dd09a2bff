use serde::{self, Deserialize, Deserializer, Serializer};
use time::{Date, format_description::FormatItem, macros::format_description};

/// Billingo sends and expects calendar dates as `YYYY-MM-DD`.
pub const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a Billingo date.
///
/// Some endpoints return timestamps (`2024-01-15 10:20:30` or RFC 3339) where the
/// schema declares a date, so anything after the date part is ignored.
pub fn parse_date(date_str: &str) -> Result<Date, String> {
    let date_part = date_str
        .split(['T', ' '])
        .next()
        .unwrap_or(date_str);

    Date::parse(date_part, DATE_FORMAT).map_err(|e| format!("Failed to parse date '{date_str}': {e}"))
}

/// Formats a date the way the Billingo API expects it.
pub fn format_date(date: &Date) -> Result<String, time::error::Format> {
    date.format(DATE_FORMAT)
}

// Serialization module for time::Date
pub mod billingo_date_format {
    use super::{Date, Deserialize, Deserializer, Serializer, format_date, parse_date, serde};

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = format_date(date).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date_str = String::deserialize(deserializer)?;
        parse_date(&date_str).map_err(serde::de::Error::custom)
    }
}

// Optional date serialization module. Empty strings read back as `None`.
pub mod billingo_date_format_option {
    use super::{Date, Deserialize, Deserializer, Serializer, format_date, parse_date, serde};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => {
                let formatted = format_date(date).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.is_empty() => parse_date(&s).map(Some).map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use time::macros::date;

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Dated {
        #[serde(with = "billingo_date_format")]
        due_date: Date,
        #[serde(default, skip_serializing_if = "Option::is_none", with = "billingo_date_format_option")]
        paid_date: Option<Date>,
    }

    #[test]
    fn parses_plain_dates_and_timestamps() {
        assert_eq!(parse_date("2024-01-15").unwrap(), date!(2024 - 01 - 15));
        assert_eq!(parse_date("2024-01-15 10:20:30").unwrap(), date!(2024 - 01 - 15));
        assert_eq!(parse_date("2024-01-15T10:20:30+01:00").unwrap(), date!(2024 - 01 - 15));
        assert!(parse_date("15/01/2024").is_err());
    }

    #[test]
    fn serializes_dates_as_year_month_day() {
        let dated = Dated {
            due_date: date!(2024 - 02 - 05),
            paid_date: None,
        };
        let json = serde_json::to_value(&dated).unwrap();
        assert_eq!(json, serde_json::json!({ "due_date": "2024-02-05" }));
    }

    #[test]
    fn empty_optional_date_reads_as_none() {
        let dated: Dated =
            serde_json::from_str(r#"{"due_date": "2024-02-05", "paid_date": ""}"#).unwrap();
        assert_eq!(dated.paid_date, None);

        let dated: Dated =
            serde_json::from_str(r#"{"due_date": "2024-02-05", "paid_date": null}"#).unwrap();
        assert_eq!(dated.paid_date, None);
    }

    #[test]
    fn malformed_optional_date_is_an_error() {
        let result: Result<Dated, _> =
            serde_json::from_str(r#"{"due_date": "2024-02-05", "paid_date": "soon"}"#);
        assert!(result.is_err());
    }
}
