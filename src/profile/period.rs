//! Employment and education periods.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A period as stored in the content store.
///
/// Older records hold free text (`"2022 - 2024"`); newer ones hold a
/// structured range. Both shapes are resolved here, once, at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Period {
    /// A structured date range.
    Range {
        /// Start date.
        from: NaiveDate,
        /// End date; absent for ongoing periods.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<NaiveDate>,
        /// Whether the period is ongoing regardless of `to`.
        #[serde(default, rename = "isCurrent")]
        is_current: bool,
    },
    /// Preformatted text.
    Text(String),
}

impl Period {
    /// Returns `true` if the period has no end.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        matches!(self, Self::Range { is_current: true, .. } | Self::Range { to: None, .. })
    }

    /// Start date, when structured.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        match self {
            Self::Range { from, .. } => Some(*from),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Range { from, to, .. } => {
                write!(f, "{} – ", from.format("%b %Y"))?;
                match to {
                    Some(end) if !self.is_current() => write!(f, "{}", end.format("%b %Y")),
                    _ => f.write_str("Present"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn period(value: serde_json::Value) -> Period {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn text_passes_through() {
        let p = period(json!("2024 - 2028 (Expected)"));
        assert_eq!(p, Period::Text("2024 - 2028 (Expected)".into()));
        assert_eq!(p.to_string(), "2024 - 2028 (Expected)");
        assert_eq!(p.start(), None);
    }

    #[test]
    fn closed_range() {
        let p = period(json!({"from": "2025-05-01", "to": "2025-08-31", "isCurrent": false}));
        assert_eq!(p.to_string(), "May 2025 – Aug 2025");
        assert!(!p.is_current());
    }

    #[test]
    fn open_range_is_present() {
        let p = period(json!({"from": "2022-01-10"}));
        assert_eq!(p.to_string(), "Jan 2022 – Present");
        assert!(p.is_current());
    }

    #[test]
    fn current_flag_overrides_end_date() {
        let p = period(json!({"from": "2022-01-10", "to": "2023-01-01", "isCurrent": true}));
        assert_eq!(p.to_string(), "Jan 2022 – Present");
    }

    #[test]
    fn unrecognized_shape_is_rejected() {
        assert!(serde_json::from_value::<Period>(json!({"to": "2023-01-01"})).is_err());
        assert!(serde_json::from_value::<Period>(json!(42)).is_err());
    }
}
