//! Custom serde helpers for backend wire formats.

/// `NaiveDate` as the backend writes it: `YYYY/MM/DD`.
///
/// Deserialization also accepts ISO `YYYY-MM-DD`; serialization always
/// writes the slash form so records round-trip byte for byte.
pub mod slash_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y/%m/%d";
    const ISO_FORMAT: &str = "%Y-%m-%d";

    pub fn parse(value: &str) -> Option<NaiveDate> {
        let trimmed = value.trim();
        NaiveDate::parse_from_str(trimmed, FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(trimmed, ISO_FORMAT))
            .ok()
    }

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("Invalid date: {}", raw)))
    }
}
