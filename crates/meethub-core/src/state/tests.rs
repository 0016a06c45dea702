use chrono::{NaiveDate, NaiveTime};
use tempfile::tempdir;

use crate::error::MeetHubError;
use crate::models::{
    ActionItemKind, ActionItemStatus, ArticlePatch, MeetingPatch, MeetingStatus, NewActionItem,
    NewArticle, NewMeeting, SourceType,
};

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("time")
}

fn meeting(store: &SqliteStateStore, day: u32, topic: &str) -> i64 {
    store
        .create_meeting(&NewMeeting::new(date(2026, 5, day), time(10, 0), topic, "Riley"))
        .expect("create meeting")
}

#[test]
fn open_creates_schema_and_migrate_is_idempotent() {
    let temp = tempdir().expect("tempdir");
    let db_path = temp.path().join("nested").join("hub.sqlite3");
    let store = SqliteStateStore::open(&db_path).expect("open failed");

    for table in [
        "meetings",
        "meeting_notes",
        "action_items",
        "attachments",
        "meeting_urls",
        "kb_articles",
    ] {
        assert!(store.has_table(table).expect("has_table"), "missing {table}");
    }
    store.migrate().expect("second migrate");

    drop(store);
    let reopened = SqliteStateStore::open(&db_path).expect("reopen");
    assert!(reopened.list_meetings().expect("list").is_empty());
}

#[cfg(unix)]
#[test]
fn open_hardens_state_db_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().expect("tempdir");
    let db_path = temp.path().join("hub.sqlite3");
    let _store = SqliteStateStore::open(&db_path).expect("open failed");

    let mode = std::fs::metadata(&db_path)
        .expect("metadata")
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn meeting_create_update_and_list_orders_latest_first() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    let early = meeting(&store, 1, "Chaos day retro");
    let late = meeting(&store, 20, "SLO review");

    store
        .update_meeting(
            early,
            &MeetingPatch {
                status: Some(MeetingStatus::Completed),
                topic: Some("Chaos day retrospective".to_string()),
                ..MeetingPatch::default()
            },
        )
        .expect("update");

    let listed = store.list_meetings().expect("list");
    let ids = listed.iter().map(|m| m.meeting.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![late, early]);

    let updated = store.get_meeting(early).expect("get").expect("exists");
    assert_eq!(updated.topic, "Chaos day retrospective");
    assert_eq!(updated.status, MeetingStatus::Completed);
    assert_eq!(updated.presenter, "Riley");
    assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn update_and_delete_report_missing_rows() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    let patch = MeetingPatch {
        topic: Some("x".to_string()),
        ..MeetingPatch::default()
    };
    assert!(matches!(
        store.update_meeting(99, &patch),
        Err(MeetHubError::NotFound(_))
    ));
    assert!(matches!(
        store.delete_meeting(99),
        Err(MeetHubError::NotFound(_))
    ));
    assert!(matches!(
        store.delete_article(99),
        Err(MeetHubError::NotFound(_))
    ));
    store
        .update_meeting(99, &MeetingPatch::default())
        .expect("empty patch is a no-op");
}

#[test]
fn notes_upsert_keeps_single_row_and_joins_into_listing() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    let id = meeting(&store, 3, "Incident review");

    store.upsert_meeting_notes(id, "first draft", 4).expect("insert");
    let first = store.get_meeting_notes(id).expect("get").expect("exists");
    store.upsert_meeting_notes(id, "final notes", 9).expect("update");
    let second = store.get_meeting_notes(id).expect("get").expect("exists");

    assert_eq!(first.id, second.id);
    assert_eq!(second.notes, "final notes");
    assert_eq!(second.attendee_count, 9);

    let listed = store.list_meetings().expect("list");
    assert_eq!(listed[0].notes.as_deref(), Some("final notes"));
    assert_eq!(listed[0].attendee_count, Some(9));
    assert_eq!(listed[0].notes_id, Some(second.id));
}

#[test]
fn child_rows_require_existing_meeting() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    assert!(matches!(
        store.upsert_meeting_notes(5, "orphan", 0),
        Err(MeetHubError::NotFound(_))
    ));
    assert!(matches!(
        store.add_meeting_url(5, "doc", "https://example.test"),
        Err(MeetHubError::NotFound(_))
    ));
    assert!(matches!(
        store.save_attachment(5, "a.txt", b"x", None),
        Err(MeetHubError::NotFound(_))
    ));
}

#[test]
fn action_items_filter_by_kind_and_track_status() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    let id = meeting(&store, 4, "Toil review");

    let action = store
        .add_action_item(&NewActionItem {
            meeting_id: id,
            kind: ActionItemKind::ActionItem,
            description: "Automate cert rotation".to_string(),
            assignee: "Jo".to_string(),
            due_date: Some(date(2026, 6, 1)),
        })
        .expect("add action");
    let todo = store
        .add_action_item(&NewActionItem {
            meeting_id: id,
            kind: ActionItemKind::Todo,
            description: "Share slides".to_string(),
            assignee: String::new(),
            due_date: None,
        })
        .expect("add todo");

    let all = store.list_action_items(id, None).expect("list all");
    assert_eq!(
        all.iter().map(|item| item.id).collect::<Vec<_>>(),
        vec![action, todo]
    );
    assert_eq!(all[0].status, ActionItemStatus::Open);
    assert_eq!(all[0].due_date, Some(date(2026, 6, 1)));
    assert_eq!(all[1].due_date, None);

    let todos = store
        .list_action_items(id, Some(ActionItemKind::Todo))
        .expect("list todos");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].description, "Share slides");

    store
        .update_action_item_status(action, ActionItemStatus::InProgress)
        .expect("status");
    let all = store.list_action_items(id, None).expect("list again");
    assert_eq!(all[0].status, ActionItemStatus::InProgress);

    store.delete_action_item(todo).expect("delete");
    assert!(matches!(
        store.update_action_item_status(todo, ActionItemStatus::Completed),
        Err(MeetHubError::NotFound(_))
    ));
}

#[test]
fn attachments_store_hash_and_infer_type() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    let id = meeting(&store, 6, "Capacity planning");

    let att = store
        .save_attachment(id, "forecast.csv", b"month,pods\n1,40\n", None)
        .expect("save");
    let listed = store.list_attachments(id).expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].file_type, "text/csv");
    assert_eq!(listed[0].file_size, 16);
    assert_eq!(
        listed[0].content_hash,
        blake3::hash(b"month,pods\n1,40\n").to_hex().to_string()
    );

    let data = store.attachment_data(att).expect("data").expect("exists");
    assert_eq!(data.data, b"month,pods\n1,40\n".to_vec());

    let explicit = store
        .save_attachment(id, "blob", b"", Some("application/x-custom"))
        .expect("save explicit");
    let data = store.attachment_data(explicit).expect("data").expect("exists");
    assert_eq!(data.file_type, "application/x-custom");
    assert!(data.data.is_empty());

    assert!(matches!(
        store.save_attachment(id, "  ", b"x", None),
        Err(MeetHubError::Validation(_))
    ));
}

#[test]
fn deleting_meeting_cascades_to_children() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    let id = meeting(&store, 7, "Game day");
    store.upsert_meeting_notes(id, "notes", 3).expect("notes");
    store
        .add_action_item(&NewActionItem {
            meeting_id: id,
            kind: ActionItemKind::Todo,
            description: "x".to_string(),
            assignee: String::new(),
            due_date: None,
        })
        .expect("item");
    store.save_attachment(id, "a.md", b"# hi", None).expect("att");
    store
        .add_meeting_url(id, "Recording", "https://video.test/1")
        .expect("url");

    store.delete_meeting(id).expect("delete");

    assert!(store.get_meeting_notes(id).expect("notes").is_none());
    assert!(store.list_action_items(id, None).expect("items").is_empty());
    assert!(store.list_attachments(id).expect("atts").is_empty());
    assert!(store.list_meeting_urls(id).expect("urls").is_empty());
}

#[test]
fn meeting_urls_round_trip_and_delete() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    let id = meeting(&store, 8, "Observability sync");
    let url_id = store
        .add_meeting_url(id, "Dashboard", "https://grafana.test/d/1")
        .expect("add");
    let urls = store.list_meeting_urls(id).expect("list");
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0].url_name, "Dashboard");

    store.delete_meeting_url(url_id).expect("delete");
    assert!(store.list_meeting_urls(id).expect("list").is_empty());
    assert!(matches!(
        store.add_meeting_url(id, "Empty", " "),
        Err(MeetHubError::Validation(_))
    ));
}

#[test]
fn seed_is_applied_once_and_listing_orders_by_category_then_title() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    assert_eq!(store.seed_default_articles().expect("seed"), 15);
    assert_eq!(store.seed_default_articles().expect("reseed"), 0);
    assert_eq!(store.count_articles().expect("count"), 15);

    let articles = store.list_articles().expect("list");
    let keys = articles
        .iter()
        .map(|a| (a.category.clone(), a.title.clone()))
        .collect::<Vec<_>>();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(articles[0].category, "Business Continuity");
}

#[test]
fn keyword_search_ors_tokens_case_insensitively() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    store.seed_default_articles().expect("seed");

    let hits = store.search_articles("GRAFANA terraform").expect("search");
    let titles = hits.iter().map(|a| a.title.as_str()).collect::<Vec<_>>();
    assert_eq!(
        titles,
        vec!["Terraform IaC Standards", "Grafana Dashboard Best Practices"]
    );

    assert!(store.search_articles("zzz-no-such").expect("search").is_empty());
    assert_eq!(store.search_articles("   ").expect("blank").len(), 15);
}

#[test]
fn keyword_search_treats_wildcards_literally() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    store
        .add_article(&NewArticle::new("Error budget at 100%", "Other", "https://a.test"))
        .expect("add");
    store
        .add_article(&NewArticle::new("Error budget at 1000", "Other", "https://b.test"))
        .expect("add");

    let hits = store.search_articles("100%").expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Error budget at 100%");
    assert!(store.search_articles("_").expect("underscore").is_empty());
}

#[test]
fn article_patch_updates_only_supplied_fields() {
    let store = SqliteStateStore::open_in_memory().expect("open");
    let id = store
        .add_article(
            &NewArticle::new("Runbook", "Incident Management", "https://wiki.test/runbook")
                .with_tags("incident"),
        )
        .expect("add");

    store
        .update_article(
            id,
            &ArticlePatch {
                source_type: Some(SourceType::External),
                tags: Some("incident,P1".to_string()),
                ..ArticlePatch::default()
            },
        )
        .expect("update");

    let article = store.get_article(id).expect("get").expect("exists");
    assert_eq!(article.title, "Runbook");
    assert_eq!(article.source_type, SourceType::External);
    assert_eq!(article.tags, "incident,P1");

    let counts = store.article_category_counts().expect("counts");
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].category, "Incident Management");
    assert_eq!(counts[0].articles, 1);
}
