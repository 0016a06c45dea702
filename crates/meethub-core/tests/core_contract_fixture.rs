use std::{fs, path::PathBuf};

use meethub_core::error::MeetHubError;
use meethub_core::models::{AssistantResponse, CategoryCount, ResponseKind};
use meethub_core::{Assistant, AssistantConfig, InMemoryArticles};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

const FIXED_TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CoreContractFixture {
    error_payload_missing_meeting: Value,
    empty_query_response: AssistantResponse,
    category_count: CategoryCount,
}

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("core_contract_fixture.json")
}

fn load_fixture_raw_value() -> Value {
    let raw = fs::read_to_string(fixture_path()).expect("read core contract fixture");
    serde_json::from_str(&raw).expect("parse core contract fixture")
}

fn load_fixture() -> CoreContractFixture {
    serde_json::from_value(load_fixture_raw_value()).expect("decode core contract fixture")
}

#[test]
fn empty_query_response_matches_contract() {
    let fixture = load_fixture();
    let raw = load_fixture_raw_value();

    let assistant = Assistant::new(InMemoryArticles::default(), AssistantConfig::default());
    let response = assistant.respond("").expect("respond");
    assert_eq!(response.kind, ResponseKind::EmptyQuery);
    assert_eq!(response, fixture.empty_query_response);

    let serialized = serde_json::to_value(&response).expect("serialize response");
    assert!(
        serialized.get("intents").is_none(),
        "intents must be omitted when empty"
    );
    assert_eq!(serialized, raw["empty_query_response"]);
}

#[test]
fn category_count_fixture_roundtrip_matches_contract_shape() {
    let fixture = load_fixture();
    let raw = load_fixture_raw_value();

    let serialized = serde_json::to_value(&fixture.category_count).expect("serialize count");
    assert_eq!(serialized, raw["category_count"]);

    let mut bad = raw["category_count"].clone();
    bad["articles"] = Value::String("3".to_string());
    assert!(
        serde_json::from_value::<CategoryCount>(bad).is_err(),
        "numeric fields must reject string payloads"
    );
}

#[test]
fn error_payload_fixture_matches_missing_meeting_contract() {
    let fixture = load_fixture();

    let payload = MeetHubError::NotFound("meeting 42".to_string()).to_payload("meeting.get");
    let mut serialized = serde_json::to_value(payload).expect("serialize error payload");

    let trace_id = serialized
        .get("trace_id")
        .and_then(Value::as_str)
        .expect("trace_id string");
    Uuid::parse_str(trace_id).expect("trace_id must be a UUID");
    serialized["trace_id"] = Value::String(FIXED_TRACE_ID.to_string());

    assert_eq!(serialized, fixture.error_payload_missing_meeting);
}
