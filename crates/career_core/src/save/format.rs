//! JSON snapshot format
//!
//! Saves are pretty-printed JSON with camelCase keys. Loading is a three
//! step pipeline: shape check on the raw value, integer coercion of counters
//! written by older clients as floats, then typed decoding and
//! normalization.

use chrono::DateTime;
use serde_json::{Map, Number, Value};
use tracing::warn;

use super::error::SnapshotError;
use super::normalize::normalize;
use crate::config::UpgradeConfig;
use crate::data::Catalog;
use crate::models::PlayerSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    String,
    Number,
    Array,
    Object,
}

impl Kind {
    fn matches(self, value: &Value) -> bool {
        match self {
            Kind::String => value.is_string(),
            Kind::Number => value.is_number(),
            Kind::Array => value.is_array(),
            Kind::Object => value.is_object(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Kind::String => "a string",
            Kind::Number => "a number",
            Kind::Array => "an array",
            Kind::Object => "an object",
        }
    }
}

const REQUIRED: [(&str, Kind); 8] = [
    ("name", Kind::String),
    ("position", Kind::String),
    ("xp", Kind::Number),
    ("fanBase", Kind::Number),
    ("bankBalance", Kind::Number),
    ("completedGames", Kind::Array),
    ("attributes", Kind::Object),
    ("createdAt", Kind::String),
];

const OPTIONAL: [(&str, Kind); 1] = [("overallRating", Kind::Number)];

const BALANCES: [&str; 3] = ["xp", "fanBase", "bankBalance"];

const COUNTERS: [&str; 3] = ["overallRating", "winStreak", "completedSeasons"];

const GAME_COUNTERS: [&str; 6] =
    ["gameNumber", "points", "rebounds", "assists", "steals", "blocks"];

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Shape check on a raw snapshot value.
pub fn validate(value: &Value) -> Result<(), SnapshotError> {
    let object = value.as_object().ok_or(SnapshotError::NotAnObject)?;

    for (field, kind) in REQUIRED {
        let Some(found) = object.get(field) else {
            return Err(SnapshotError::MissingField { field: field.to_string() });
        };
        if !kind.matches(found) {
            return Err(SnapshotError::WrongType {
                field: field.to_string(),
                expected: kind.name(),
                found: type_name(found),
            });
        }
    }
    for (field, kind) in OPTIONAL {
        if let Some(found) = object.get(field) {
            if !kind.matches(found) {
                return Err(SnapshotError::WrongType {
                    field: field.to_string(),
                    expected: kind.name(),
                    found: type_name(found),
                });
            }
        }
    }

    if let Some(Value::String(created_at)) = object.get("createdAt") {
        if DateTime::parse_from_rfc3339(created_at).is_err() {
            return Err(SnapshotError::InvalidTimestamp { value: created_at.clone() });
        }
    }
    Ok(())
}

/// Round a numeric value to an integer in `0..=max`. Non-numbers are left
/// for the typed decoder to reject.
fn coerce_uint(value: &mut Value, max: u64) {
    let Value::Number(n) = value else {
        return;
    };
    if n.is_u64() {
        if let Some(v) = n.as_u64() {
            if v > max {
                *value = Value::Number(Number::from(max));
            }
        }
        return;
    }
    let raw = n.as_f64().unwrap_or(0.0);
    let clamped = if raw.is_finite() { raw.round().clamp(0.0, max as f64) } else { 0.0 };
    *value = Value::Number(Number::from(clamped as u64));
}

fn coerce_fields(object: &mut Map<String, Value>, fields: &[&str], max: u64) {
    for field in fields {
        if let Some(value) = object.get_mut(*field) {
            coerce_uint(value, max);
        }
    }
}

fn coerce_counters(object: &mut Map<String, Value>) {
    coerce_fields(object, &BALANCES, u64::MAX);
    coerce_fields(object, &COUNTERS, u32::MAX as u64);

    if let Some(Value::Object(record)) = object.get_mut("teamRecord") {
        coerce_fields(record, &["wins", "losses"], u32::MAX as u64);
    }
    if let Some(Value::Object(categories)) = object.get_mut("attributes") {
        for levels in categories.values_mut() {
            if let Value::Object(levels) = levels {
                for level in levels.values_mut() {
                    coerce_uint(level, u8::MAX as u64);
                }
            }
        }
    }
    if let Some(Value::Array(games)) = object.get_mut("completedGames") {
        for game in games.iter_mut() {
            if let Value::Object(game) = game {
                coerce_fields(game, &GAME_COUNTERS, u32::MAX as u64);
                coerce_fields(game, &["playoffRound", "playoffGame"], u8::MAX as u64);
            }
        }
    }
    if let Some(Value::Array(deals)) = object.get_mut("activeEndorsements") {
        for deal in deals.iter_mut() {
            if let Value::Object(deal) = deal {
                coerce_fields(deal, &["gamesRemaining", "totalClaims"], u32::MAX as u64);
            }
        }
    }
    if let Some(Value::Object(contract)) = object.get_mut("contract") {
        coerce_fields(contract, &["years", "pick"], u32::MAX as u64);
    }
}

/// Validate, decode and normalize a snapshot from an already-parsed value.
pub fn from_value(
    mut value: Value,
    config: &UpgradeConfig,
    catalog: &Catalog,
) -> Result<PlayerSnapshot, SnapshotError> {
    validate(&value)?;
    if let Value::Object(object) = &mut value {
        coerce_counters(object);
    }

    let mut snapshot: PlayerSnapshot = serde_json::from_value(value).map_err(|e| {
        let reason = e.to_string();
        SnapshotError::InvalidField { field: field_from_message(&reason), reason }
    })?;
    normalize(&mut snapshot, config, catalog);
    Ok(snapshot)
}

/// Load a snapshot from JSON text. Rejections are logged with the field at fault.
pub fn from_json(
    json: &str,
    config: &UpgradeConfig,
    catalog: &Catalog,
) -> Result<PlayerSnapshot, SnapshotError> {
    let result = serde_json::from_str::<Value>(json)
        .map_err(|e| SnapshotError::InvalidJson(e.to_string()))
        .and_then(|value| from_value(value, config, catalog));
    if let Err(err) = &result {
        warn!(field = err.field().unwrap_or("-"), error = %err, "snapshot rejected");
    }
    result
}

pub fn to_value(snapshot: &PlayerSnapshot) -> Result<Value, SnapshotError> {
    serde_json::to_value(snapshot).map_err(|e| SnapshotError::Serialization(e.to_string()))
}

/// Pretty-printed JSON (two-space indent). Stable for a given snapshot.
pub fn to_json(snapshot: &PlayerSnapshot) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(snapshot).map_err(|e| SnapshotError::Serialization(e.to_string()))
}

/// Typed decoding errors carry no path; missing-field messages still name the field.
fn field_from_message(message: &str) -> String {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
        .unwrap_or("snapshot")
        .to_string()
}
