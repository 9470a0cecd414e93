//! Profile records loaded from the content store.

pub mod history;
pub mod period;

use serde::Deserialize;

pub use history::{RecentHistory, MAX_RECENTS, RECENT_COMMANDS_KEY};
pub use period::Period;

use crate::contribution::extract_username;

/// The subset of the profile document the activity card needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name.
    pub name: Option<String>,
    /// GitHub handle or profile URL.
    pub github: Option<String>,
}

impl Profile {
    /// Bare GitHub username, recomputed from the stored field on every call.
    #[must_use]
    pub fn github_username(&self) -> Option<String> {
        extract_username(self.github.as_deref())
    }
}

/// An experience or education entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    /// Role or degree.
    pub title: String,
    /// Company or school.
    #[serde(alias = "company", alias = "institution")]
    pub organization: String,
    /// When it happened.
    pub period: Period,
}
