use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Serialize as ISO-8601 with millisecond precision and a `Z` suffix
/// (`2024-05-01T09:15:00.123Z`).
pub fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Custom deserializer for timestamp that accepts both integers (ms) and RFC3339 strings
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => {
            let ms = n.as_i64().ok_or_else(|| Error::custom("invalid timestamp"))?;
            DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| Error::custom("timestamp out of range"))
        }
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp: {}", e))),
        _ => Err(Error::custom("timestamp must be a number or string")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::models::ChannelMessage;

    use super::*;

    #[test]
    fn test_serialize_millisecond_precision() {
        let msg = ChannelMessage {
            from: "Bob Smith".to_string(),
            timestamp: Utc.timestamp_millis_opt(1714554900123).unwrap(),
            text: "Hi".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""timestamp":"2024-05-01T09:15:00.123Z""#), "{json}");
    }

    #[test]
    fn test_serialize_whole_seconds_keeps_millis() {
        let msg = ChannelMessage {
            from: "Bob Smith".to_string(),
            timestamp: Utc.timestamp_opt(0, 0).unwrap(),
            text: "Hi".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("1970-01-01T00:00:00.000Z"), "{json}");
    }

    #[test]
    fn test_deserialize_rfc3339_string() {
        let json = r#"{"from":"A","timestamp":"2024-05-01T09:15:00.123Z","text":"t"}"#;
        let msg: ChannelMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.timestamp.timestamp_millis(), 1714554900123);
    }

    #[test]
    fn test_deserialize_integer_millis() {
        let json = r#"{"from":"A","timestamp":1714554900123,"text":"t"}"#;
        let msg: ChannelMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.timestamp.timestamp_millis(), 1714554900123);
    }

    #[test]
    fn test_deserialize_rejects_other_types() {
        let json = r#"{"from":"A","timestamp":true,"text":"t"}"#;
        let result: Result<ChannelMessage, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must be a number or string"));
    }

    #[test]
    fn test_deserialize_invalid_string() {
        let json = r#"{"from":"A","timestamp":"yesterday","text":"t"}"#;
        let result: Result<ChannelMessage, _> = serde_json::from_str(json);
        assert!(result.unwrap_err().to_string().contains("invalid RFC3339 timestamp"));
    }
}
