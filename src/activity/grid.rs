//! Week-column layout for the heatmap.

use chrono::Datelike;

use crate::contribution::ContributionDay;

const GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];

/// A month label placed above a week column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthMarker {
    /// Abbreviated month name.
    pub label: String,
    /// 1-based week column.
    pub column: usize,
}

/// Lays out days column-major: seven rows per week column.
pub struct HeatmapGrid<'a> {
    days: &'a [ContributionDay],
}

impl<'a> HeatmapGrid<'a> {
    /// Wraps an ascending day sequence.
    #[must_use]
    pub const fn new(days: &'a [ContributionDay]) -> Self {
        Self { days }
    }

    /// Number of week columns.
    #[must_use]
    pub const fn week_columns(&self) -> usize {
        self.days.len().div_ceil(7)
    }

    /// The day at `row` (0..7) of week `column` (0-based).
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&'a ContributionDay> {
        if row >= 7 {
            return None;
        }
        self.days.get(column * 7 + row)
    }

    /// Month labels for the first cell and each first-of-month, skipping
    /// labels closer than two columns to the previous one.
    #[must_use]
    pub fn month_markers(&self) -> Vec<MonthMarker> {
        let mut markers: Vec<MonthMarker> = Vec::new();
        for (index, day) in self.days.iter().enumerate() {
            if index != 0 && day.iso_date.day() != 1 {
                continue;
            }
            let column = index / 7 + 1;
            if markers.last().is_some_and(|last| column - last.column < 2) {
                continue;
            }
            markers.push(MonthMarker { label: day.iso_date.format("%b").to_string(), column });
        }
        markers
    }

    /// Renders month labels and seven rows of glyphs, two characters per column.
    #[must_use]
    pub fn render(&self) -> String {
        let width = self.week_columns() * 2;
        let mut header = vec![' '; width];
        for marker in self.month_markers() {
            let start = (marker.column - 1) * 2;
            for (offset, ch) in marker.label.chars().enumerate() {
                if header.len() <= start + offset {
                    header.resize(start + offset + 1, ' ');
                }
                header[start + offset] = ch;
            }
        }

        let mut lines = vec![header.into_iter().collect::<String>().trim_end().to_string()];
        for row in 0..7 {
            let line: String = (0..self.week_columns())
                .map(|column| self.cell(row, column).map_or(' ', |day| glyph(day.level)))
                .flat_map(|ch| [ch, ' '])
                .collect();
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}

/// Glyph for a heatmap level; out-of-range levels render as the top glyph.
#[must_use]
pub fn glyph(level: u8) -> char {
    GLYPHS[usize::from(level).min(GLYPHS.len() - 1)]
}
