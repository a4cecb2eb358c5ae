//! Loading connection records exported by the backend.
//!
//! This is where malformed input is rejected: once a [`Connection`] exists its
//! timestamp is valid and the scheduling functions cannot fail. Field names
//! follow the backend (`lastContact`, `frequency`) with the spelled-out
//! variants accepted as aliases.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::schedule::Connection;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an array of connections or an object with a `connections` array")]
    Shape,
    #[error("record {index} is malformed: {source}")]
    Malformed {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("record {index} has an id that is neither a string nor a number")]
    InvalidId { index: usize },
    #[error("connection {id}: invalid lastContact timestamp {value:?}")]
    InvalidTimestamp { id: String, value: String },
}

/// A connection exactly as the backend sends it, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConnection {
    id: Value,
    #[serde(default)]
    name: String,
    #[serde(default, alias = "lastContactAt", alias = "last_contact")]
    last_contact: Option<String>,
    #[serde(default, alias = "frequencyDays", alias = "frequency_days")]
    frequency: Option<Value>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

/// Read and validate a connections file.
pub fn load_connections(path: &Path) -> Result<Vec<Connection>, RecordError> {
    let json = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let connections = parse_connections(&json)?;
    tracing::info!(path = %path.display(), count = connections.len(), "connections loaded");
    Ok(connections)
}

/// Parse a JSON array of connections, or an object wrapping one under `connections`.
pub fn parse_connections(json: &str) -> Result<Vec<Connection>, RecordError> {
    let items = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("connections") {
            Some(Value::Array(items)) => items,
            _ => return Err(RecordError::Shape),
        },
        _ => return Err(RecordError::Shape),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let raw: RawConnection = serde_json::from_value(item)
                .map_err(|source| RecordError::Malformed { index, source })?;
            validate(index, raw)
        })
        .collect()
}

fn validate(index: usize, raw: RawConnection) -> Result<Connection, RecordError> {
    let id = match raw.id {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => return Err(RecordError::InvalidId { index }),
    };

    let last_contact_at = match raw.last_contact.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(parse_timestamp(value).ok_or_else(|| {
            RecordError::InvalidTimestamp {
                id: id.clone(),
                value: value.to_string(),
            }
        })?),
    };

    let frequency_days = raw.frequency.as_ref().and_then(coerce_frequency);
    if frequency_days.is_none() && raw.frequency.as_ref().is_some_and(|v| !v.is_null()) {
        tracing::debug!(%id, frequency = ?raw.frequency, "unreadable frequency, using default cadence");
    }

    Ok(Connection {
        id,
        name: raw.name,
        last_contact_at,
        frequency_days,
        company: raw.company,
        role: raw.role,
    })
}

/// RFC 3339, or a naive ISO-8601 datetime/date taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Lenient integer coercion: numbers truncate, strings use their leading
/// integer prefix, anything else is absent.
fn coerce_frequency(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
