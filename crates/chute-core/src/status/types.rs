use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The device's latest status, as served from `/status/latest.json`.
///
/// Only `path` and `ts` drive the display; everything else is kept so a
/// renderer can surface it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDocument {
    /// Path of the annotated snapshot image.
    pub path: String,

    /// Capture time in unix seconds, kept in the device's number form.
    pub ts: serde_json::Number,

    /// Faces recognised in the snapshot. Entries that do not parse are
    /// skipped; a missing or malformed list reads as empty.
    #[serde(default, deserialize_with = "lenient_detections")]
    pub detections: Vec<Detection>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub name: String,
    pub score: f64,
}

fn lenient_detections<'de, D>(deserializer: D) -> Result<Vec<Detection>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(entries)) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

/// Largest integer an f64 holds exactly.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

impl StatusDocument {
    /// Image source with a decache token, so every refresh is a distinct
    /// resource to the image cache even when `path` does not change.
    pub fn decached_image_source(&self) -> String {
        format!("{}?decache={}", self.path, self.decache_token())
    }

    /// `ts` as it goes into the image URL. Whole-valued floats print
    /// without a fractional part (`1000.0` becomes `1000`).
    pub fn decache_token(&self) -> String {
        match self.whole_seconds() {
            Some(secs) if self.ts.is_f64() => secs.to_string(),
            _ => self.ts.to_string(),
        }
    }

    /// Capture time, when `ts` is a whole number of seconds in range.
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        self.whole_seconds()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }

    fn whole_seconds(&self) -> Option<i64> {
        if let Some(secs) = self.ts.as_i64() {
            return Some(secs);
        }
        self.ts
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < MAX_EXACT_F64)
            .map(|f| f as i64)
    }

    /// True when at least one detection is not a known person.
    pub fn has_unknown_visitor(&self) -> bool {
        self.detections.iter().any(|d| d.name == "Unknown")
    }
}

/// What the status banner says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusMessage {
    Processing,
    Ok,
    Failed,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatusMessage::Processing => "Processing...",
            StatusMessage::Ok => "OK",
            StatusMessage::Failed => "Request failed",
        };
        f.write_str(text)
    }
}

/// State of one security view instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityState {
    pub status_message: StatusMessage,
    pub image_source: String,
    pub latest: Option<StatusDocument>,
}

impl SecurityState {
    /// State before any fetch resolves.
    pub fn new(placeholder_image: impl Into<String>) -> Self {
        Self {
            status_message: StatusMessage::Processing,
            image_source: placeholder_image.into(),
            latest: None,
        }
    }
}
