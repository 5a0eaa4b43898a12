// src/application/dto/serde_time.rs
//! RFC 3339 timestamps with second precision and a `Z` suffix.
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(D::Error::custom)
}

pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|value| {
            DateTime::parse_from_rfc3339(&value)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(D::Error::custom)
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "super")]
        at: chrono::DateTime<chrono::Utc>,
        #[serde(default, with = "super::option")]
        maybe: Option<chrono::DateTime<chrono::Utc>>,
    }

    #[test]
    fn writes_second_precision_utc() {
        let at = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let json = serde_json::to_value(Stamp { at, maybe: None }).unwrap();
        assert_eq!(json["at"], "2024-01-02T03:04:05Z");
        assert!(json["maybe"].is_null());
    }

    #[test]
    fn reads_offsets_into_utc() {
        let stamp: Stamp = serde_json::from_str(r#"{"at":"2024-01-02T05:04:05+02:00"}"#).unwrap();
        assert_eq!(stamp.at, chrono::Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        assert!(stamp.maybe.is_none());
    }
}
