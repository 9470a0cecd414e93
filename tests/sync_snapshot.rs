//! Sync-then-display integration test.
//!
//! Runs the sync command against a canned calendar with a pinned clock,
//! then feeds the written file back through the heatmap card exactly as the
//! `show` command does.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use heatgrid::activity::{ActivityStatus, HeatmapGrid};
use heatgrid::adapters::fixed::FixedClock;
use heatgrid::adapters::live::filesystem::LiveFileSystem;
use heatgrid::adapters::live::snapshot::FileSnapshotSource;
use heatgrid::commands::{show, sync};
use heatgrid::config::SyncConfig;
use heatgrid::context::ServiceContext;
use heatgrid::contribution::RawDay;
use heatgrid::ports::calendar::{CalendarFuture, CalendarQuery, ContributionCalendar};

/// Returns one row per day of the query range, plus a row outside it.
struct CannedCalendar;

impl ContributionCalendar for CannedCalendar {
    fn fetch_days(&self, query: &CalendarQuery) -> CalendarFuture<'_> {
        let mut rows = vec![RawDay::new("2020-01-01", 50, Some("FOURTH_QUARTILE"))];
        let start = query.from.date_naive();
        let end = query.to.date_naive();
        for (i, date) in start.iter_days().take_while(|d| *d <= end).enumerate() {
            let count = u32::try_from(i % 9).unwrap();
            rows.push(RawDay::new(&format!("{date}T00:00:00Z"), count, None));
        }
        Box::pin(async move { Ok(rows) })
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 6, 30, 0).unwrap()
}

fn config(days: u32) -> SyncConfig {
    SyncConfig::from_lookup(|name| match name {
        "GITHUB_GRAPHQL_TOKEN" => Some("token".into()),
        "GITHUB_USERNAME" => Some("octocat".into()),
        "GITHUB_CONTRIBUTION_DAYS" => Some(days.to_string()),
        _ => None,
    })
    .unwrap()
}

#[tokio::test]
async fn synced_snapshot_loads_into_card() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("frontend/public/github-contributions.json");
    let ctx = ServiceContext::new(Box::new(FixedClock(now())), Box::new(LiveFileSystem));

    let snapshot = sync::run_with_context(&ctx, &CannedCalendar, &config(364), &output)
        .await
        .unwrap();
    assert_eq!(snapshot.contributions.len(), 364);
    assert_eq!(snapshot.contributions.last().unwrap().iso_date, now().date_naive());
    assert!(snapshot.contributions.iter().all(|d| d.count < 9));

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["username"], "octocat");
    assert_eq!(written["days"], 364);
    assert_eq!(written["generatedAt"], "2026-10-19T06:30:00.000Z");
    assert_eq!(written["contributions"][0]["isoDate"], "2025-10-21");

    let source = FileSnapshotSource::new(ctx.fs.as_ref(), &output);
    let state = show::run_with_source(&ctx, &source, Some("https://github.com/octocat"), 364).await;
    assert_eq!(state.status, ActivityStatus::Synced("octocat".into()));
    assert_eq!(state.days, snapshot.contributions);
    assert_eq!(state.last_updated_text(), "Oct 19, 2026");
    assert_eq!(HeatmapGrid::new(&state.days).week_columns(), 52);
}

#[tokio::test]
async fn shorter_display_window_takes_the_tail() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("github-contributions.json");
    let ctx = ServiceContext::new(Box::new(FixedClock(now())), Box::new(LiveFileSystem));

    sync::run_with_context(&ctx, &CannedCalendar, &config(400), &output).await.unwrap();

    let source = FileSnapshotSource::new(ctx.fs.as_ref(), &output);
    let state = show::run_with_source(&ctx, &source, Some("octocat"), 364).await;
    assert_eq!(state.days.len(), 364);
    assert_eq!(state.days[0].iso_date, NaiveDate::from_ymd_opt(2025, 10, 21).unwrap());
    assert!(state.days.windows(2).all(|w| w[0].iso_date < w[1].iso_date));
}

#[tokio::test]
async fn snapshot_for_another_user_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("github-contributions.json");
    let ctx = ServiceContext::new(Box::new(FixedClock(now())), Box::new(LiveFileSystem));

    sync::run_with_context(&ctx, &CannedCalendar, &config(30), &output).await.unwrap();

    let source = FileSnapshotSource::new(ctx.fs.as_ref(), &output);
    let state = show::run_with_source(&ctx, &source, Some("hubot"), 30).await;
    assert_eq!(state.status, ActivityStatus::UsernameMismatch);
    assert!(state.days.iter().all(|d| d.count == 0));
}
