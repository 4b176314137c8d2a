//! Synchronizer tests against an in-memory fetcher.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

use tempfile::TempDir;

use loto_cache::caixa::{FetchDraws, LatestDraw};
use loto_cache::sync::{SyncOptions, SyncState, Synchronizer};
use loto_cache::{ContestNumber, Draw, DrawStore, LotoError, MalformedLinePolicy, Result};

fn draw(contest: u32) -> Draw {
    let offset = (contest % 10) as u8;
    let numbers: Vec<u8> = (1..=15).map(|n| ((n + offset - 1) % 25) + 1).collect();
    Draw::new(ContestNumber::new(contest), numbers).unwrap()
}

/// Serves draws from a map; `latest == None` simulates an unreachable API
/// and `failing` contests error on fetch. Every fetch attempt is recorded.
struct MockFetcher {
    draws: BTreeMap<u32, Draw>,
    latest: Option<u32>,
    failing: HashSet<u32>,
    attempts: Mutex<Vec<u32>>,
}

impl MockFetcher {
    fn up_to(latest: u32) -> Self {
        Self {
            draws: (1..=latest).map(|c| (c, draw(c))).collect(),
            latest: Some(latest),
            failing: HashSet::new(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    fn unreachable() -> Self {
        Self {
            draws: BTreeMap::new(),
            latest: None,
            failing: HashSet::new(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    fn failing_on(mut self, contests: &[u32]) -> Self {
        self.failing = contests.iter().copied().collect();
        self
    }

    fn attempted(&self) -> Vec<u32> {
        let mut attempts = self.attempts.lock().unwrap().clone();
        attempts.sort_unstable();
        attempts
    }
}

impl FetchDraws for MockFetcher {
    async fn latest(&self) -> Result<LatestDraw> {
        let contest = self.latest.ok_or(LotoError::NoData)?;
        Ok(LatestDraw {
            draw: self.draws[&contest].clone(),
            draw_date: Some("06/02/2025".to_string()),
        })
    }

    async fn fetch(&self, contest: ContestNumber) -> Result<Draw> {
        self.attempts.lock().unwrap().push(contest.as_u32());
        if self.failing.contains(&contest.as_u32()) {
            return Err(LotoError::NoData);
        }
        self.draws
            .get(&contest.as_u32())
            .cloned()
            .ok_or(LotoError::NoData)
    }
}

fn store_at(path: &Path) -> DrawStore {
    DrawStore::new(path)
}

async fn run(
    syncer: &Synchronizer<MockFetcher>,
) -> (loto_cache::sync::SyncReport, Vec<String>) {
    let mut statuses = Vec::new();
    let mut on_status = |msg: &str| statuses.push(msg.to_string());
    let mut on_progress = |_pct: f64, _contest: ContestNumber| {};
    let report = syncer
        .synchronize(&mut on_status, &mut on_progress)
        .await
        .unwrap();
    (report, statuses)
}

#[tokio::test]
async fn test_full_sync_from_empty_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draws.txt");
    let syncer = Synchronizer::new(MockFetcher::up_to(5), store_at(&path));

    let (report, statuses) = run(&syncer).await;

    assert_eq!(report.state, SyncState::Done);
    assert_eq!(report.latest, Some(ContestNumber::new(5)));
    assert_eq!(report.fetched, 5);
    assert!(report.still_missing.is_empty());

    assert_eq!(syncer.total(), 5);
    assert_eq!(syncer.latest(), Some(ContestNumber::new(5)));
    assert!(statuses.iter().any(|s| s.contains("complete and consistent")));
    assert!(statuses.iter().any(|s| s.contains("drawn 06/02/2025")));
}

#[tokio::test]
async fn test_fetches_exactly_the_missing_contests() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draws.txt");

    // Store holds 1..=10 except 3 and 7.
    let store = store_at(&path);
    let prefilled: Vec<Draw> = (1..=10).filter(|c| *c != 3 && *c != 7).map(draw).collect();
    store.save(&prefilled).unwrap();

    let syncer = Synchronizer::new(MockFetcher::up_to(10), store);
    let (report, _) = run(&syncer).await;

    assert_eq!(report.state, SyncState::Done);
    assert_eq!(report.fetched, 2);
    assert_eq!(syncer.fetcher().attempted(), vec![3, 7]);
    assert_eq!(syncer.total(), 10);
}

#[tokio::test]
async fn test_unreachable_api_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draws.txt");

    let store = store_at(&path);
    store.save(&[draw(1), draw(2)]).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let syncer = Synchronizer::new(MockFetcher::unreachable(), store_at(&path));
    let (report, statuses) = run(&syncer).await;

    assert_eq!(report.state, SyncState::PartialFailure);
    assert_eq!(report.latest, None);
    assert_eq!(report.fetched, 0);
    assert!(statuses.iter().any(|s| s.contains("Cannot reach the draws API")));

    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_failed_contest_stays_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draws.txt");
    let fetcher = MockFetcher::up_to(5).failing_on(&[4]);
    let syncer = Synchronizer::new(fetcher, store_at(&path));

    let (report, statuses) = run(&syncer).await;

    assert_eq!(report.state, SyncState::PartialFailure);
    assert_eq!(report.fetched, 4);
    assert_eq!(report.still_missing, vec![ContestNumber::new(4)]);
    assert!(statuses
        .iter()
        .any(|s| s.contains("Contest 4 could not be fetched")));

    // Everything else landed in the store.
    assert_eq!(syncer.total(), 4);
    let stored: Vec<u32> = syncer
        .all_draws()
        .unwrap()
        .iter()
        .map(|d| d.contest().as_u32())
        .collect();
    assert_eq!(stored, vec![1, 2, 3, 5]);
}

#[tokio::test]
async fn test_second_run_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draws.txt");
    let syncer = Synchronizer::new(MockFetcher::up_to(6), store_at(&path));

    let (first, _) = run(&syncer).await;
    assert_eq!(first.state, SyncState::Done);
    let bytes_after_first = std::fs::read(&path).unwrap();
    let attempts_after_first = syncer.fetcher().attempted().len();

    let (second, _) = run(&syncer).await;
    assert_eq!(second.state, SyncState::Done);
    assert_eq!(second.fetched, 0);

    let bytes_after_second = std::fs::read(&path).unwrap();
    assert_eq!(bytes_after_first, bytes_after_second);
    assert_eq!(syncer.fetcher().attempted().len(), attempts_after_first);
}

#[tokio::test]
async fn test_progress_reports_every_fetched_contest() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draws.txt");
    let syncer = Synchronizer::new(MockFetcher::up_to(4), store_at(&path));

    let mut progress: Vec<(f64, u32)> = Vec::new();
    let mut on_status = |_: &str| {};
    let mut on_progress =
        |pct: f64, contest: ContestNumber| progress.push((pct, contest.as_u32()));
    syncer
        .synchronize(&mut on_status, &mut on_progress)
        .await
        .unwrap();

    assert_eq!(progress.len(), 4);
    let mut contests: Vec<u32> = progress.iter().map(|(_, c)| *c).collect();
    contests.sort_unstable();
    assert_eq!(contests, vec![1, 2, 3, 4]);
    assert!((progress.last().unwrap().0 - 100.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_malformed_line_dropped_during_sync() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draws.txt");
    std::fs::write(&path, format!("{}\ngarbage,line\n", draw(1).to_line())).unwrap();

    let syncer = Synchronizer::new(MockFetcher::up_to(3), store_at(&path));
    let (report, _) = run(&syncer).await;

    assert_eq!(report.state, SyncState::Done);
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("garbage"));
    assert_eq!(contents.lines().count(), 3);
}

#[tokio::test]
async fn test_strict_policy_aborts_before_overwriting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draws.txt");
    let original = format!("{}\ngarbage,line\n", draw(1).to_line());
    std::fs::write(&path, &original).unwrap();

    let store = DrawStore::with_policy(&path, MalformedLinePolicy::Error);
    let syncer = Synchronizer::new(MockFetcher::up_to(3), store);

    let mut on_status = |_: &str| {};
    let mut on_progress = |_: f64, _: ContestNumber| {};
    let err = syncer
        .synchronize(&mut on_status, &mut on_progress)
        .await
        .unwrap_err();

    assert!(matches!(err, LotoError::MalformedLine { line_number: 2, .. }));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[tokio::test]
async fn test_custom_concurrency_still_completes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draws.txt");
    let syncer = Synchronizer::new(MockFetcher::up_to(8), store_at(&path));

    let mut on_status = |_: &str| {};
    let mut on_progress = |_: f64, _: ContestNumber| {};
    let report = syncer
        .synchronize_with(
            &SyncOptions { concurrency: 1 },
            &mut on_status,
            &mut on_progress,
        )
        .await
        .unwrap();

    assert_eq!(report.state, SyncState::Done);
    assert_eq!(syncer.total(), 8);
}
