//! Contribution calendar port for the upstream activity API.

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};

use crate::contribution::RawDay;

/// Boxed future type alias used by [`ContributionCalendar`] to keep the trait dyn-compatible.
pub type CalendarFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<RawDay>, CalendarError>> + Send + 'a>>;

/// A calendar request for one account over an inclusive time range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarQuery {
    /// Account login.
    pub login: String,
    /// Range start.
    pub from: DateTime<Utc>,
    /// Range end.
    pub to: DateTime<Utc>,
}

/// Failures talking to the calendar API.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Non-success HTTP status.
    #[error("GitHub GraphQL request failed ({status}): {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// The response carried a GraphQL `errors` array.
    #[error("GitHub GraphQL error: {0}")]
    GraphQl(String),

    /// `data.user` was null.
    #[error("GitHub user \"{0}\" not found or inaccessible")]
    UserNotFound(String),

    /// The response had no contribution calendar.
    #[error("No contribution calendar data returned")]
    MissingCalendar,

    /// The request did not complete in time.
    #[error("GitHub GraphQL request timed out")]
    Timeout,

    /// Transport-level failure.
    #[error("GitHub GraphQL request failed: {0}")]
    Network(String),

    /// The response body was not the expected JSON.
    #[error("Failed to parse GitHub GraphQL response: {0}")]
    Decode(String),
}

/// Fetches day-level contribution rows.
pub trait ContributionCalendar: Send + Sync {
    /// Returns every calendar day the API reports for `query`, in API order.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] describing why the calendar could not be fetched.
    fn fetch_days(&self, query: &CalendarQuery) -> CalendarFuture<'_>;
}
