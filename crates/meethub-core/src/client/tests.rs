use chrono::{NaiveDate, NaiveTime};
use tempfile::tempdir;

use crate::config::AppConfig;
use crate::error::MeetHubError;
use crate::models::{
    ActionItemKind, ActionItemStatus, ArticlePatch, MeetingStatus, NewActionItem, NewArticle,
    NewMeeting, ResponseKind, SourceType,
};

use super::{MeetHub, STATE_DB_FILE};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn at(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).expect("time")
}

fn open_hub(root: &std::path::Path) -> MeetHub {
    let hub = MeetHub::open_with_config(root, AppConfig::default()).expect("open hub");
    hub.initialize().expect("initialize");
    hub
}

#[test]
fn open_creates_root_and_database_file() {
    let temp = tempdir().expect("tempdir");
    let root = temp.path().join("hub");
    let hub = MeetHub::open_with_config(&root, AppConfig::default()).expect("open");

    assert!(root.join(STATE_DB_FILE).exists());
    assert_eq!(hub.root(), root.as_path());
}

#[test]
fn initialize_seeds_once() {
    let temp = tempdir().expect("tempdir");
    let hub = MeetHub::open_with_config(temp.path(), AppConfig::default()).expect("open");

    assert_eq!(hub.initialize().expect("first init"), 15);
    assert_eq!(hub.initialize().expect("second init"), 0);
    assert_eq!(hub.list_articles().expect("list").len(), 15);
}

#[test]
fn initialize_respects_disabled_seeding() {
    let temp = tempdir().expect("tempdir");
    let config = AppConfig {
        seed_kb: false,
        ..AppConfig::default()
    };
    let hub = MeetHub::open_with_config(temp.path(), config).expect("open");

    assert_eq!(hub.initialize().expect("init"), 0);
    assert!(hub.list_articles().expect("list").is_empty());
    assert_eq!(hub.ask("incident").expect("ask").kind, ResponseKind::NoResults);
}

#[test]
fn meeting_lifecycle_through_facade() {
    let temp = tempdir().expect("tempdir");
    let hub = open_hub(temp.path());

    let meeting = hub
        .create_meeting(&NewMeeting::new(date(2026, 6, 1), at(9), "Capacity review", "Sam"))
        .expect("create");
    assert_eq!(meeting.status, MeetingStatus::Scheduled);

    let notes = hub
        .upsert_meeting_notes(meeting.id, "Discussed headroom", 7)
        .expect("notes");
    assert_eq!(notes.attendee_count, 7);

    let done = hub
        .set_meeting_status(meeting.id, MeetingStatus::Completed)
        .expect("status");
    assert_eq!(done.status, MeetingStatus::Completed);
    assert_eq!(done.topic, "Capacity review");

    let listed = hub.list_meetings().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].notes.as_deref(), Some("Discussed headroom"));

    hub.delete_meeting(meeting.id).expect("delete");
    assert!(hub.get_meeting(meeting.id).expect("get").is_none());
    assert!(hub.get_meeting_notes(meeting.id).expect("notes").is_none());
}

#[test]
fn status_change_on_missing_meeting_is_not_found() {
    let temp = tempdir().expect("tempdir");
    let hub = open_hub(temp.path());

    let err = hub
        .set_meeting_status(404, MeetingStatus::Cancelled)
        .expect_err("missing meeting");
    assert!(matches!(err, MeetHubError::NotFound(_)));
}

#[test]
fn knowledge_base_crud_through_facade() {
    let temp = tempdir().expect("tempdir");
    let hub = open_hub(temp.path());

    let article = hub
        .add_article(
            &NewArticle::new("Load Test Harness", "Reliability Testing", "https://wiki/lt")
                .with_tags("load,k6")
                .with_source_type(SourceType::Internal),
        )
        .expect("add");
    assert_eq!(hub.search_articles("k6").expect("search")[0].id, article.id);

    let updated = hub
        .update_article(
            article.id,
            &ArticlePatch {
                source_type: Some(SourceType::External),
                ..ArticlePatch::default()
            },
        )
        .expect("update");
    assert_eq!(updated.source_type, SourceType::External);
    assert_eq!(updated.title, "Load Test Harness");

    let reliability = hub
        .article_categories()
        .expect("categories")
        .into_iter()
        .find(|c| c.category == "Reliability Testing")
        .expect("category present");
    assert_eq!(reliability.articles, 2);

    hub.delete_article(article.id).expect("delete");
    assert!(hub.get_article(article.id).expect("get").is_none());
}

#[test]
fn ask_uses_seeded_catalog() {
    let temp = tempdir().expect("tempdir");
    let hub = open_hub(temp.path());

    let response = hub.ask("incident").expect("ask");
    assert_eq!(response.kind, ResponseKind::Results);
    assert!(
        response
            .articles
            .iter()
            .any(|a| a.title == "Incident Response Runbook")
    );
    assert!(response.articles.len() <= 5);
    assert!(response.suggestions.len() <= 4);
}

#[test]
fn dashboard_counts_match_stored_data() {
    let temp = tempdir().expect("tempdir");
    let hub = open_hub(temp.path());
    let today = date(2026, 6, 10);

    let past = hub
        .create_meeting(&NewMeeting::new(date(2026, 6, 3), at(10), "Game day recap", "Ana"))
        .expect("past");
    hub.set_meeting_status(past.id, MeetingStatus::Completed)
        .expect("complete");
    let later = hub
        .create_meeting(&NewMeeting::new(date(2026, 6, 24), at(10), "DR drill", "Lee"))
        .expect("later");
    let sooner = hub
        .create_meeting(&NewMeeting::new(date(2026, 6, 10), at(15), "SLO review", "Kim"))
        .expect("sooner");
    let cancelled = hub
        .create_meeting(&NewMeeting::new(date(2026, 6, 12), at(9), "Vendor sync", "Jo"))
        .expect("cancelled");
    hub.set_meeting_status(cancelled.id, MeetingStatus::Cancelled)
        .expect("cancel");

    let open_item = hub
        .add_action_item(&NewActionItem {
            meeting_id: past.id,
            kind: ActionItemKind::ActionItem,
            description: "Automate failover check".to_string(),
            assignee: "Ana".to_string(),
            due_date: Some(date(2026, 6, 20)),
        })
        .expect("open item");
    let closed_item = hub
        .add_action_item(&NewActionItem {
            meeting_id: past.id,
            kind: ActionItemKind::Todo,
            description: "Share slides".to_string(),
            assignee: "Ana".to_string(),
            due_date: None,
        })
        .expect("closed item");
    hub.update_action_item_status(closed_item, ActionItemStatus::Completed)
        .expect("close");

    let summary = hub.dashboard(today).expect("dashboard");
    assert_eq!(summary.as_of, today);
    assert_eq!(summary.total_meetings, 4);
    assert_eq!(summary.completed_meetings, 1);
    assert_eq!(summary.scheduled_meetings, 2);
    assert_eq!(summary.kb_article_count, 15);

    assert_eq!(summary.open_action_items.len(), 1);
    let group = &summary.open_action_items[0];
    assert_eq!(group.meeting_id, past.id);
    assert_eq!(group.topic, "Game day recap");
    assert_eq!(
        group.items.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![open_item]
    );

    assert_eq!(
        summary
            .upcoming_meetings
            .iter()
            .map(|m| m.id)
            .collect::<Vec<_>>(),
        vec![sooner.id, later.id]
    );
    assert_eq!(
        summary
            .kb_coverage
            .iter()
            .map(|c| c.articles)
            .sum::<usize>(),
        15
    );
}
