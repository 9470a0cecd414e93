//! Intensity levels for heatmap cells.
//!
//! Every path that produces a [`ContributionDay`](super::ContributionDay)
//! resolves its level through [`resolve_level`], so the qualitative table
//! and the count thresholds live in exactly one place.

use std::fmt;
use std::str::FromStr;

/// Highest level on the heatmap scale.
pub const MAX_LEVEL: u8 = 4;

/// Qualitative contribution levels reported by the GitHub calendar API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualitativeLevel {
    /// No contributions.
    None,
    /// Lowest quartile of active days.
    FirstQuartile,
    /// Second quartile.
    SecondQuartile,
    /// Third quartile.
    ThirdQuartile,
    /// Busiest quartile.
    FourthQuartile,
}

impl QualitativeLevel {
    /// Returns the numeric heatmap level for this bucket.
    #[must_use]
    pub const fn as_level(self) -> u8 {
        match self {
            Self::None => 0,
            Self::FirstQuartile => 1,
            Self::SecondQuartile => 2,
            Self::ThirdQuartile => 3,
            Self::FourthQuartile => 4,
        }
    }

    /// Returns the API enum name (e.g. `"THIRD_QUARTILE"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::FirstQuartile => "FIRST_QUARTILE",
            Self::SecondQuartile => "SECOND_QUARTILE",
            Self::ThirdQuartile => "THIRD_QUARTILE",
            Self::FourthQuartile => "FOURTH_QUARTILE",
        }
    }
}

impl fmt::Display for QualitativeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualitativeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "FIRST_QUARTILE" => Ok(Self::FirstQuartile),
            "SECOND_QUARTILE" => Ok(Self::SecondQuartile),
            "THIRD_QUARTILE" => Ok(Self::ThirdQuartile),
            "FOURTH_QUARTILE" => Ok(Self::FourthQuartile),
            other => Err(format!("unknown contribution level: {other}")),
        }
    }
}

/// Whatever level information a source row carried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelHint {
    /// A known qualitative enum value.
    Qualitative(QualitativeLevel),
    /// A numeric level, not yet clamped.
    Numeric(f64),
    /// No usable level; derive it from the count.
    Absent,
}

/// Buckets a raw count: 0, 1–2, 3–4, 5–7, 8+.
#[must_use]
pub const fn level_for_count(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=7 => 3,
        _ => 4,
    }
}

/// Resolves the heatmap level for a row.
///
/// A qualitative level wins, then a numeric level clamped to `0..=4`,
/// then the count thresholds.
#[must_use]
pub fn resolve_level(hint: LevelHint, count: u32) -> u8 {
    match hint {
        LevelHint::Qualitative(level) => level.as_level(),
        LevelHint::Numeric(value) if value.is_finite() => clamp_level(value),
        LevelHint::Numeric(_) | LevelHint::Absent => level_for_count(count),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_level(value: f64) -> u8 {
    value.trunc().clamp(0.0, f64::from(MAX_LEVEL)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualitative_table_covers_every_bucket() {
        let cases = [
            ("NONE", 0),
            ("FIRST_QUARTILE", 1),
            ("SECOND_QUARTILE", 2),
            ("THIRD_QUARTILE", 3),
            ("FOURTH_QUARTILE", 4),
        ];
        for (name, expected) in cases {
            let level: QualitativeLevel = name.parse().unwrap();
            assert_eq!(level.as_level(), expected, "{name}");
            assert_eq!(level.to_string(), name);
        }
    }

    #[test]
    fn unknown_qualitative_name_is_rejected() {
        assert!("FIFTH_QUARTILE".parse::<QualitativeLevel>().is_err());
        assert!("none".parse::<QualitativeLevel>().is_err());
    }

    #[test]
    fn count_thresholds() {
        let cases = [(0, 0), (1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (6, 3), (7, 3), (8, 4), (500, 4)];
        for (count, expected) in cases {
            assert_eq!(level_for_count(count), expected, "count {count}");
        }
    }

    #[test]
    fn qualitative_beats_count() {
        let hint = LevelHint::Qualitative(QualitativeLevel::FirstQuartile);
        assert_eq!(resolve_level(hint, 40), 1);
    }

    #[test]
    fn numeric_level_is_clamped() {
        assert_eq!(resolve_level(LevelHint::Numeric(9.0), 0), 4);
        assert_eq!(resolve_level(LevelHint::Numeric(-2.0), 10), 0);
        assert_eq!(resolve_level(LevelHint::Numeric(2.7), 0), 2);
    }

    #[test]
    fn non_finite_numeric_falls_back_to_count() {
        assert_eq!(resolve_level(LevelHint::Numeric(f64::NAN), 6), 3);
    }

    #[test]
    fn absent_level_uses_count() {
        assert_eq!(resolve_level(LevelHint::Absent, 6), 3);
        assert_eq!(resolve_level(LevelHint::Absent, 0), 0);
    }
}
