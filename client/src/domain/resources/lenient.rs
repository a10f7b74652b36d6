//! Field deserializers tolerating the backend's loose document shapes.

use chrono::{DateTime, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` as the field type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decode a calendar date sent either as `YYYY-MM-DD` or as an RFC 3339
/// timestamp. Timestamps keep their UTC date.
pub(crate) fn date_or_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| Some(timestamp.naive_utc().date()))
        .map_err(|error| D::Error::custom(format!("invalid date '{trimmed}': {error}")))
}

#[cfg(test)]
mod tests {
    //! Null and date tolerance coverage.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "date_or_timestamp")]
        born: Option<NaiveDate>,
    }

    fn may_17() -> NaiveDate {
        NaiveDate::from_ymd_opt(2012, 5, 17).expect("valid calendar date")
    }

    #[test]
    fn nulls_become_defaults() {
        let decoded: Sample =
            serde_json::from_value(json!({ "tags": null, "born": null })).expect("nulls decode");

        assert!(decoded.tags.is_empty());
        assert_eq!(decoded.born, None);
    }

    #[rstest]
    #[case::date_only("2012-05-17")]
    #[case::mongo_timestamp("2012-05-17T00:00:00.000Z")]
    #[case::offset_timestamp("2012-05-17T10:30:00+02:00")]
    fn dates_accept_both_wire_forms(#[case] raw: &str) {
        let decoded: Sample = serde_json::from_value(json!({ "born": raw })).expect("date decodes");

        assert_eq!(decoded.born, Some(may_17()));
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert!(serde_json::from_value::<Sample>(json!({ "born": "next tuesday" })).is_err());
    }
}
