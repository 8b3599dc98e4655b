//! Fixtures

pub const PING_EVENT_DATA: &str = include_str!("fixtures/ping_event.json");
pub const PUSH_EVENT_DATA: &str = include_str!("fixtures/push_event.json");
pub const PULL_REQUEST_OPENED_DATA: &str = include_str!("fixtures/pull_request_opened.json");
pub const PULL_REQUEST_REVIEW_SUBMITTED_DATA: &str =
    include_str!("fixtures/pull_request_review_submitted.json");
pub const PULL_REQUEST_REVIEW_COMMENT_CREATED_DATA: &str =
    include_str!("fixtures/pull_request_review_comment_created.json");
pub const RELEASE_PUBLISHED_DATA: &str = include_str!("fixtures/release_published.json");
pub const REPOSITORY_CREATED_DATA: &str = include_str!("fixtures/repository_created.json");
pub const STATUS_EVENT_DATA: &str = include_str!("fixtures/status_event.json");
pub const TEAM_CREATED_DATA: &str = include_str!("fixtures/team_created.json");
pub const TEAM_ADD_EVENT_DATA: &str = include_str!("fixtures/team_add_event.json");
pub const ORGANIZATION_MEMBER_ADDED_DATA: &str =
    include_str!("fixtures/organization_member_added.json");
pub const WATCH_STARTED_DATA: &str = include_str!("fixtures/watch_started.json");
