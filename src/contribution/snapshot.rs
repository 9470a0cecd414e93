//! The snapshot file written by `heatgrid sync` and read by the loader.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::day::{ContributionDay, RawDay};

/// A snapshot as produced by the sync command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Account the calendar belongs to.
    pub username: String,
    /// When the snapshot was generated.
    #[serde(serialize_with = "serialize_millis")]
    pub generated_at: DateTime<Utc>,
    /// Window length the snapshot covers.
    pub days: u32,
    /// One record per day, ascending.
    pub contributions: Vec<ContributionDay>,
}

impl Snapshot {
    /// Renders the snapshot as 2-space indented JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }
}

fn serialize_millis<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// A lenient view of a snapshot file.
///
/// Every field is optional so that hand-edited or older snapshots still load;
/// rows stay raw until the loader normalizes them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotDocument {
    /// Recorded username or profile URL.
    pub username: Option<String>,
    /// Raw `generatedAt` value.
    pub generated_at: Option<String>,
    /// Recorded window length.
    pub days: Option<u32>,
    /// Raw day entries.
    #[serde(deserialize_with = "null_as_empty")]
    pub contributions: Vec<RawDay>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<RawDay>, D::Error> {
    Ok(Option::<Vec<RawDay>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SnapshotDocument {
    /// Parses a snapshot document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a JSON object of the expected shape.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// `generatedAt` as a timestamp; `None` when absent or unparsable.
    #[must_use]
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.generated_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw.trim()).ok().map(|dt| dt.with_timezone(&Utc))
    }
}
