//! Live adapter for the `ContributionCalendar` port using the GitHub GraphQL API.

use std::time::Duration;

use chrono::SecondsFormat;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::contribution::RawDay;
use crate::ports::calendar::{CalendarError, CalendarFuture, CalendarQuery, ContributionCalendar};

/// Default GitHub GraphQL endpoint.
pub const GITHUB_GRAPHQL_API: &str = "https://api.github.com/graphql";
const GITHUB_API_VERSION: &str = "2022-11-28";
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const ERROR_BODY_LIMIT: usize = 200;

const CONTRIBUTIONS_QUERY: &str = r"
  query UserContributions($login: String!, $from: DateTime!, $to: DateTime!) {
    user(login: $login) {
      contributionsCollection(from: $from, to: $to) {
        contributionCalendar {
          weeks {
            contributionDays {
              date
              contributionCount
              contributionLevel
            }
          }
        }
      }
    }
  }
";

/// Live calendar client that calls the GitHub GraphQL API.
pub struct LiveGitHubCalendar {
    client: Client,
    endpoint: String,
    token: String,
}

impl LiveGitHubCalendar {
    /// Creates a client authenticated with `token` that posts to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Network`] if the HTTP client cannot be built.
    pub fn new(token: &str, endpoint: &str) -> Result<Self, CalendarError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CalendarError::Network(e.to_string()))?;
        Ok(Self { client, endpoint: endpoint.to_string(), token: token.to_string() })
    }
}

/// Request body sent to the GraphQL endpoint.
#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
struct Variables<'a> {
    login: &'a str,
    from: String,
    to: String,
}

/// Top-level GraphQL response.
#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: Option<String>,
}

#[derive(Deserialize)]
struct ResponseData {
    user: Option<User>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    contributions_collection: Option<Collection>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Collection {
    contribution_calendar: Option<Calendar>,
}

#[derive(Deserialize)]
struct Calendar {
    weeks: Option<Vec<Week>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Week {
    #[serde(default)]
    contribution_days: Option<Vec<RawDay>>,
}

/// Extracts the flattened day rows from a GraphQL response body.
///
/// # Errors
///
/// Returns [`CalendarError::Decode`] for unparsable JSON,
/// [`CalendarError::GraphQl`] when the payload carries errors,
/// [`CalendarError::UserNotFound`] when `data.user` is null, and
/// [`CalendarError::MissingCalendar`] when no weeks are present.
pub fn parse_calendar_response(login: &str, body: &str) -> Result<Vec<RawDay>, CalendarError> {
    let response: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| CalendarError::Decode(e.to_string()))?;

    if let Some(first) = response.errors.as_deref().and_then(<[GraphQlError]>::first) {
        let message = first.message.clone().unwrap_or_else(|| "Unknown error".to_string());
        return Err(CalendarError::GraphQl(message));
    }

    let user = response
        .data
        .and_then(|data| data.user)
        .ok_or_else(|| CalendarError::UserNotFound(login.to_string()))?;

    let weeks = user
        .contributions_collection
        .and_then(|c| c.contribution_calendar)
        .and_then(|c| c.weeks)
        .ok_or(CalendarError::MissingCalendar)?;

    Ok(weeks.into_iter().flat_map(|week| week.contribution_days.unwrap_or_default()).collect())
}

impl ContributionCalendar for LiveGitHubCalendar {
    fn fetch_days(&self, query: &CalendarQuery) -> CalendarFuture<'_> {
        let login = query.login.clone();
        let from = query.from.to_rfc3339_opts(SecondsFormat::Millis, true);
        let to = query.to.to_rfc3339_opts(SecondsFormat::Millis, true);

        Box::pin(async move {
            let body = GraphQlRequest {
                query: CONTRIBUTIONS_QUERY,
                variables: Variables { login: &login, from, to },
            };

            log::debug!("POST {} for {login}", self.endpoint);
            let response = self
                .client
                .post(&self.endpoint)
                .header(ACCEPT, "application/vnd.github+json")
                .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
                .header(AUTHORIZATION, format!("Bearer {}", self.token))
                .header(USER_AGENT, concat!("heatgrid/", env!("CARGO_PKG_VERSION")))
                .json(&body)
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            let text = response.text().await.map_err(transport_error)?;

            if !status.is_success() {
                return Err(CalendarError::Http {
                    status: status.as_u16(),
                    body: text.chars().take(ERROR_BODY_LIMIT).collect(),
                });
            }

            parse_calendar_response(&login, &text)
        })
    }
}

fn transport_error(err: reqwest::Error) -> CalendarError {
    if err.is_timeout() {
        CalendarError::Timeout
    } else {
        CalendarError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: &serde_json::Value) -> String {
        value.to_string()
    }

    #[test]
    fn flattens_weeks_in_order() {
        let payload = json!({"data": {"user": {"contributionsCollection": {"contributionCalendar": {
            "weeks": [
                {"contributionDays": [
                    {"date": "2024-01-01", "contributionCount": 0, "contributionLevel": "NONE"},
                    {"date": "2024-01-02", "contributionCount": 5, "contributionLevel": "THIRD_QUARTILE"}
                ]},
                {"contributionDays": [
                    {"date": "2024-01-08", "contributionCount": 9, "contributionLevel": "FOURTH_QUARTILE"}
                ]}
            ]
        }}}}});
        let days = parse_calendar_response("octocat", &body(&payload)).unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days[1], RawDay::new("2024-01-02", 5, Some("THIRD_QUARTILE")));
        assert_eq!(days[2].normalize().unwrap().level, 4);
    }

    #[test]
    fn graphql_errors_win() {
        let payload = json!({"data": null, "errors": [{"message": "Bad credentials"}]});
        let err = parse_calendar_response("octocat", &body(&payload)).unwrap_err();
        assert!(matches!(err, CalendarError::GraphQl(ref m) if m == "Bad credentials"));
    }

    #[test]
    fn empty_errors_array_is_ignored() {
        let payload = json!({"errors": [], "data": {"user": {"contributionsCollection": {
            "contributionCalendar": {"weeks": []}}}}});
        assert!(parse_calendar_response("octocat", &body(&payload)).unwrap().is_empty());
    }

    #[test]
    fn null_user_is_not_found() {
        let payload = json!({"data": {"user": null}});
        let err = parse_calendar_response("ghost", &body(&payload)).unwrap_err();
        assert_eq!(err.to_string(), "GitHub user \"ghost\" not found or inaccessible");
    }

    #[test]
    fn missing_weeks_is_missing_calendar() {
        let payload = json!({"data": {"user": {"contributionsCollection": null}}});
        let err = parse_calendar_response("octocat", &body(&payload)).unwrap_err();
        assert!(matches!(err, CalendarError::MissingCalendar));
    }

    #[test]
    fn non_json_is_decode_error() {
        let err = parse_calendar_response("octocat", "<html>").unwrap_err();
        assert!(matches!(err, CalendarError::Decode(_)));
    }

    #[test]
    fn query_selects_calendar_fields() {
        for field in ["contributionCount", "contributionLevel", "$login: String!", "$from: DateTime!"] {
            assert!(CONTRIBUTIONS_QUERY.contains(field), "{field}");
        }
    }
}
