//! Webhook handler tests

mod fixtures;

use actix_web::{
    http::StatusCode,
    test,
    web::{Bytes, Data},
};
use ghook_config::Config;
use pretty_assertions::assert_eq;

use crate::{
    constants::GITHUB_EVENT_HEADER,
    event_type::EventType,
    server::{build_actix_app, AppContext},
};

fn test_context() -> Data<AppContext> {
    Data::new(AppContext::new(Config::from_env_no_version()))
}

async fn send_event(event_type: &str, payload: &'static str) -> (StatusCode, Bytes) {
    let app = test::init_service(build_actix_app(test_context())).await;
    let req = test::TestRequest::post()
        .uri("/")
        .insert_header(("Content-Type", "application/json"))
        .insert_header((GITHUB_EVENT_HEADER, event_type))
        .set_payload(payload)
        .to_request();

    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;

    (status, body)
}

async fn assert_event_response(
    event_type: EventType,
    payload: &'static str,
    expected_body: &str,
) {
    let (status, body) = send_event(event_type.to_str(), payload).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body.as_ref(), expected_body.as_bytes());
}

#[actix_rt::test]
async fn ping_event() {
    assert_event_response(EventType::Ping, fixtures::PING_EVENT_DATA, "Ping.").await;
}

#[actix_rt::test]
async fn push_event() {
    assert_event_response(EventType::Push, fixtures::PUSH_EVENT_DATA, "Push.").await;
}

#[actix_rt::test]
async fn pull_request_opened() {
    assert_event_response(
        EventType::PullRequest,
        fixtures::PULL_REQUEST_OPENED_DATA,
        "Pull request.",
    )
    .await;
}

#[actix_rt::test]
async fn pull_request_review_submitted() {
    assert_event_response(
        EventType::PullRequestReview,
        fixtures::PULL_REQUEST_REVIEW_SUBMITTED_DATA,
        "Pull request review.",
    )
    .await;
}

#[actix_rt::test]
async fn pull_request_review_comment_created() {
    assert_event_response(
        EventType::PullRequestReviewComment,
        fixtures::PULL_REQUEST_REVIEW_COMMENT_CREATED_DATA,
        "Pull request review comment.",
    )
    .await;
}

#[actix_rt::test]
async fn release_published() {
    assert_event_response(EventType::Release, fixtures::RELEASE_PUBLISHED_DATA, "Release.").await;
}

#[actix_rt::test]
async fn repository_created() {
    assert_event_response(
        EventType::Repository,
        fixtures::REPOSITORY_CREATED_DATA,
        "Repository.",
    )
    .await;
}

#[actix_rt::test]
async fn status_event() {
    assert_event_response(EventType::Status, fixtures::STATUS_EVENT_DATA, "Status.").await;
}

#[actix_rt::test]
async fn team_created() {
    assert_event_response(EventType::Team, fixtures::TEAM_CREATED_DATA, "Team.").await;
}

#[actix_rt::test]
async fn team_add_event() {
    assert_event_response(EventType::TeamAdd, fixtures::TEAM_ADD_EVENT_DATA, "Team add.").await;
}

#[actix_rt::test]
async fn organization_member_added() {
    assert_event_response(
        EventType::Organization,
        fixtures::ORGANIZATION_MEMBER_ADDED_DATA,
        "Organization.",
    )
    .await;
}

#[actix_rt::test]
async fn watch_started() {
    assert_event_response(EventType::Watch, fixtures::WATCH_STARTED_DATA, "Watch.").await;
}

#[actix_rt::test]
async fn unknown_event_is_acknowledged() {
    let (status, _) = send_event("somerandomevent", "{}").await;

    assert_eq!(status, StatusCode::OK);
}

#[actix_rt::test]
async fn missing_event_header_is_acknowledged() {
    let app = test::init_service(build_actix_app(test_context())).await;
    let req = test::TestRequest::post()
        .uri("/")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(fixtures::PUSH_EVENT_DATA)
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn any_method_is_acknowledged() {
    let app = test::init_service(build_actix_app(test_context())).await;
    let req = test::TestRequest::get().uri("/").to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn invalid_payload_is_a_bad_request() {
    let (status, body) = send_event(EventType::Push.to_str(), r#"{"ref": 42}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.is_empty());
}

#[actix_rt::test]
async fn pong_valid_payload() {
    let app = test::init_service(build_actix_app(test_context())).await;
    let req = test::TestRequest::post()
        .uri("/ping")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(fixtures::PING_EVENT_DATA)
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"Ping.");
}

#[actix_rt::test]
async fn pong_invalid_payload() {
    let app = test::init_service(build_actix_app(test_context())).await;
    let req = test::TestRequest::post()
        .uri("/ping")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(r#"{"zen": 42}"#)
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = test::read_body(resp).await;
    assert!(!body.is_empty());
}
