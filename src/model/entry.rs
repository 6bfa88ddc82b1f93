//! Log entries: stored record, create payload, table row and the mapping between them.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Free-form key/value bag attached to an entry.
pub type Metadata = HashMap<String, Value>;

/// A stored log entry. Entries are append-only: created, read and deleted, never updated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Entry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    /// Category discriminator, e.g. `log` or `analysis`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Label of the component that produced the entry.
    pub module: String,
    pub content: String,
    /// Comma-separated, stored exactly as given.
    pub tags: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Metadata>,
}

/// Body of `POST /entries`. `timestamp` defaults to the time of creation.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct EntryPayload {
    /// RFC 3339, or a bare `YYYY-MM-DDTHH:MM:SS[.f]` read as UTC.
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: String,
    pub module: String,
    pub content: String,
    pub tags: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Metadata>,
}

/// Parse an entry timestamp. Values without an offset are taken to be UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!("invalid timestamp '{}'", raw))
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

/// Row shape of the `entries` table; `metadata` is JSON text.
#[derive(Debug, sqlx::FromRow)]
pub struct EntryRow {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub module: String,
    pub content: String,
    pub tags: String,
    pub metadata: Option<Json<Metadata>>,
}

impl From<EntryRow> for Entry {
    fn from(row: EntryRow) -> Self {
        Self {
            id: row.id,
            timestamp: row.timestamp,
            kind: row.kind,
            module: row.module,
            content: row.content,
            tags: row.tags,
            metadata: row.metadata.map(|Json(m)| m),
        }
    }
}

impl Entry {
    /// Individual tags, trimmed, with empty segments dropped. The stored string is untouched.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample(tags: &str) -> Entry {
        Entry {
            id: 1,
            timestamp: Utc::now(),
            kind: "log".into(),
            module: "core".into(),
            content: "started".into(),
            tags: tags.into(),
            metadata: None,
        }
    }

    #[test]
    fn type_field_uses_wire_name() {
        let v = serde_json::to_value(sample("a")).unwrap();
        assert_eq!(v["type"], "log");
        assert!(v.get("kind").is_none());
    }

    #[test]
    fn payload_timestamp_and_metadata_are_optional() {
        let p: EntryPayload = serde_json::from_value(json!({
            "type": "log",
            "module": "core",
            "content": "c",
            "tags": "log,cel,analiza"
        }))
        .unwrap();
        assert!(p.timestamp.is_none());
        assert!(p.metadata.is_none());
        assert_eq!(p.kind, "log");
    }

    #[test]
    fn payload_metadata_accepts_nested_values() {
        let p: EntryPayload = serde_json::from_value(json!({
            "type": "log",
            "module": "core",
            "content": "c",
            "tags": "",
            "metadata": {"score": 0.5, "nested": {"a": [1, 2]}, "flag": null}
        }))
        .unwrap();
        let m = p.metadata.unwrap();
        assert_eq!(m["nested"]["a"][1], 2);
        assert!(m["flag"].is_null());
    }

    #[test]
    fn payload_rejects_non_object_metadata() {
        let r = serde_json::from_value::<EntryPayload>(json!({
            "type": "log",
            "module": "core",
            "content": "c",
            "tags": "",
            "metadata": [1, 2]
        }));
        assert!(r.is_err());
    }

    fn payload_with_timestamp(ts: &str) -> Result<EntryPayload, serde_json::Error> {
        serde_json::from_value(json!({
            "timestamp": ts,
            "type": "log",
            "module": "core",
            "content": "c",
            "tags": ""
        }))
    }

    #[test]
    fn timestamp_without_offset_is_read_as_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(payload_with_timestamp("2024-03-01T12:30:00").unwrap().timestamp, Some(expected));
        assert_eq!(payload_with_timestamp("2024-03-01 12:30:00").unwrap().timestamp, Some(expected));
        let fractional = payload_with_timestamp("2024-03-01T12:30:00.250000").unwrap().timestamp.unwrap();
        assert_eq!(fractional.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn timestamp_with_offset_is_converted_to_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(payload_with_timestamp("2024-03-01T12:30:00+02:00").unwrap().timestamp, Some(expected));
        assert_eq!(payload_with_timestamp("2024-03-01T10:30:00Z").unwrap().timestamp, Some(expected));
    }

    #[test]
    fn null_timestamp_is_none_and_garbage_is_rejected() {
        let p: EntryPayload = serde_json::from_value(json!({
            "timestamp": null,
            "type": "log",
            "module": "core",
            "content": "c",
            "tags": ""
        }))
        .unwrap();
        assert!(p.timestamp.is_none());
        let err = payload_with_timestamp("yesterday").unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));
    }

    #[test]
    fn tag_list_splits_and_trims() {
        assert_eq!(sample("log, cel,,analiza ").tag_list(), vec!["log", "cel", "analiza"]);
        assert!(sample("").tag_list().is_empty());
    }

    #[test]
    fn row_maps_metadata_out_of_json_wrapper() {
        let mut m = Metadata::new();
        m.insert("k".into(), json!("v"));
        let row = EntryRow {
            id: 3,
            timestamp: Utc::now(),
            kind: "log".into(),
            module: "m".into(),
            content: "c".into(),
            tags: "t".into(),
            metadata: Some(Json(m.clone())),
        };
        let entry = Entry::from(row);
        assert_eq!(entry.metadata, Some(m));
        assert_eq!(entry.id, 3);
    }
}
