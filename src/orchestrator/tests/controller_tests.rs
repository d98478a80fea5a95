use super::*;
use crate::error::ServiceError;
use crate::model::{AggregationStatus, NotificationKind};
use crate::orchestrator::RequestTracker;
use crate::test_support::{orgs, repos, FakeDirectory};
use std::time::Duration;
use tokio::sync::mpsc;

struct Harness {
    dir: Arc<FakeDirectory>,
    cmd_tx: UnboundedSender<UiCommand>,
    event_rx: UnboundedReceiver<AppEvent>,
    handle: JoinHandle<Result<()>>,
}

fn start(dir: FakeDirectory) -> Harness {
    let dir = Arc::new(dir);
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let service: Arc<dyn DirectoryService> = dir.clone();
    let handle = tokio::spawn(run_controller(service, event_tx, cmd_rx));
    Harness {
        dir,
        cmd_tx,
        event_rx,
        handle,
    }
}

impl Harness {
    async fn next_event(&mut self) -> AppEvent {
        tokio::time::timeout(Duration::from_secs(2), self.event_rx.recv())
            .await
            .expect("event before timeout")
            .expect("controller still running")
    }

    async fn no_event_within(&mut self, wait: Duration) {
        if let Ok(Some(ev)) = tokio::time::timeout(wait, self.event_rx.recv()).await {
            panic!("unexpected event: {ev:?}");
        }
    }

    async fn quit(self) {
        let _ = self.cmd_tx.send(UiCommand::Quit);
        self.handle
            .await
            .expect("controller task")
            .expect("controller result");
    }
}

fn fixture() -> FakeDirectory {
    FakeDirectory::new()
        .with_user("octocat", Ok(repos(12)), Ok(orgs(3)))
        .with_user("slowpoke", Ok(repos(40)), Ok(orgs(9)))
        .with_delays(
            "slowpoke",
            Duration::from_millis(200),
            Duration::from_millis(200),
        )
        .with_user("broken", Ok(repos(3)), Err(ServiceError::Status(500)))
}

#[tokio::test]
async fn search_for_existing_user_yields_results_location() {
    let mut h = start(fixture());
    h.cmd_tx
        .send(UiCommand::Search("octocat".into()))
        .expect("send");

    match h.next_event().await {
        AppEvent::LookupFinished {
            location,
            notification,
        } => {
            assert_eq!(location.as_deref(), Some("/results?username=octocat"));
            assert_eq!(notification.kind, NotificationKind::Success);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(h.dir.check_calls(), 1);
    h.quit().await;
}

#[tokio::test]
async fn blank_search_reports_validation_without_network() {
    let mut h = start(fixture());
    h.cmd_tx.send(UiCommand::Search("  ".into())).expect("send");

    match h.next_event().await {
        AppEvent::LookupFinished {
            location,
            notification,
        } => {
            assert_eq!(location, None);
            assert_eq!(notification.message, "Please enter a GitHub username!");
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(h.dir.check_calls(), 0);
    h.quit().await;
}

#[tokio::test]
async fn unknown_user_stays_home() {
    let mut h = start(fixture());
    h.cmd_tx
        .send(UiCommand::Search("ghost-user-404".into()))
        .expect("send");

    match h.next_event().await {
        AppEvent::LookupFinished {
            location,
            notification,
        } => {
            assert_eq!(location, None);
            assert_eq!(notification.kind, NotificationKind::Error);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    h.quit().await;
}

#[tokio::test]
async fn load_emits_result_tagged_with_token() {
    let mut h = start(fixture());
    let mut tracker = RequestTracker::default();
    let token = tracker.issue();
    h.cmd_tx
        .send(UiCommand::Load {
            token,
            username: "broken".into(),
        })
        .expect("send");

    match h.next_event().await {
        AppEvent::AggregationCompleted { token: got, result } => {
            assert_eq!(got, token);
            assert_eq!(result.status, AggregationStatus::Failed);
            assert!(result.repositories.is_empty());
        }
        other => panic!("unexpected event: {other:?}"),
    }
    h.quit().await;
}

#[tokio::test]
async fn newer_load_supersedes_outstanding_one() {
    let mut h = start(fixture());
    let mut tracker = RequestTracker::default();
    let slow = tracker.issue();
    let fast = tracker.issue();

    h.cmd_tx
        .send(UiCommand::Load {
            token: slow,
            username: "slowpoke".into(),
        })
        .expect("send");
    h.cmd_tx
        .send(UiCommand::Load {
            token: fast,
            username: "octocat".into(),
        })
        .expect("send");

    match h.next_event().await {
        AppEvent::AggregationCompleted { token, result } => {
            assert_eq!(token, fast);
            assert_eq!(result.username.as_deref(), Some("octocat"));
            assert_eq!(result.status, AggregationStatus::Ready);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    // The superseded load never reports back.
    h.no_event_within(Duration::from_millis(400)).await;
    h.quit().await;
}

#[tokio::test]
async fn abandon_drops_outstanding_load() {
    let mut h = start(fixture());
    let mut tracker = RequestTracker::default();
    h.cmd_tx
        .send(UiCommand::Load {
            token: tracker.issue(),
            username: "slowpoke".into(),
        })
        .expect("send");
    h.cmd_tx.send(UiCommand::Abandon).expect("send");

    h.no_event_within(Duration::from_millis(400)).await;
    h.quit().await;
}

#[tokio::test]
async fn controller_stops_when_ui_hangs_up() {
    let h = start(fixture());
    drop(h.cmd_tx);
    h.handle
        .await
        .expect("controller task")
        .expect("controller result");
}
