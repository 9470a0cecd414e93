//! Canonical and raw day records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::level::{resolve_level, LevelHint, QualitativeLevel};

/// One normalized heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub iso_date: NaiveDate,
    /// Number of contributions on this date.
    pub count: u32,
    /// Intensity level in `0..=4`.
    pub level: u8,
}

impl ContributionDay {
    /// An all-zero cell for `date`.
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self { iso_date: date, count: 0, level: 0 }
    }
}

/// A day entry as it arrives from a snapshot file or the GraphQL API.
///
/// Field names vary by source (`isoDate`/`date`, `count`/`contributionCount`,
/// `level`/`contributionLevel`) and any of them may be missing or carry the
/// wrong JSON type, so the entry keeps the raw values until normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawDay {
    /// Raw date string, possibly a full timestamp.
    pub date: Option<String>,
    /// Raw count value.
    pub count: Option<Value>,
    /// Raw level value: an enum name or a number.
    pub level: Option<Value>,
}

impl From<Value> for RawDay {
    fn from(value: Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };
        let pick = |keys: &[&str]| {
            keys.iter().find_map(|key| map.get(*key).filter(|v| !v.is_null()).cloned())
        };
        Self {
            date: pick(&["isoDate", "date"]).and_then(|v| v.as_str().map(str::to_string)),
            count: pick(&["count", "contributionCount"]),
            level: pick(&["level", "contributionLevel"]),
        }
    }
}

impl RawDay {
    /// Builds a raw entry from GraphQL-shaped fields.
    #[must_use]
    pub fn new(date: &str, count: u32, level: Option<&str>) -> Self {
        Self {
            date: Some(date.to_string()),
            count: Some(Value::from(count)),
            level: level.map(Value::from),
        }
    }

    /// Parses the first ten characters of the date as `YYYY-MM-DD`.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?.trim();
        let head = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
    }

    /// Count as a non-negative integer; 0 when absent or non-numeric.
    #[must_use]
    pub fn parsed_count(&self) -> u32 {
        self.count.as_ref().and_then(numeric).map_or(0, saturate_count)
    }

    /// Classifies the level value.
    #[must_use]
    pub fn level_hint(&self) -> LevelHint {
        match &self.level {
            Some(Value::String(s)) => s.trim().parse::<QualitativeLevel>().map_or_else(
                |_| s.trim().parse::<f64>().map_or(LevelHint::Absent, LevelHint::Numeric),
                LevelHint::Qualitative,
            ),
            Some(Value::Number(n)) => n.as_f64().map_or(LevelHint::Absent, LevelHint::Numeric),
            _ => LevelHint::Absent,
        }
    }

    /// Normalizes into a [`ContributionDay`], or `None` without a usable date.
    #[must_use]
    pub fn normalize(&self) -> Option<ContributionDay> {
        let iso_date = self.parsed_date()?;
        let count = self.parsed_count();
        let level = resolve_level(self.level_hint(), count);
        Some(ContributionDay { iso_date, count, level })
    }
}

fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn saturate_count(value: f64) -> u32 {
    value.trunc().clamp(0.0, f64::from(u32::MAX)) as u32
}
