//! Pull request webhook handlers.

use actix_web::HttpResponse;
use ghook_ghapi_interface::types::{GhPullRequestEvent, GhPullRequestReviewCommentEvent};
use tracing::info;

use super::parse_event_type;
use crate::{errors::Result, event_type::EventType};

pub(crate) fn parse_pull_request_event(body: &str) -> Result<GhPullRequestEvent> {
    parse_event_type(EventType::PullRequest, body)
}

pub(crate) fn parse_review_comment_event(body: &str) -> Result<GhPullRequestReviewCommentEvent> {
    parse_event_type(EventType::PullRequestReviewComment, body)
}

pub(crate) fn pull_request_event(event: GhPullRequestEvent) -> HttpResponse {
    info!(
        message = "Pull request event",
        action = ?event.action,
        pr_number = event.number,
        repository_path = %event.repository.full_name,
        username = %event.sender.login,
    );

    HttpResponse::Accepted().body("Pull request.")
}

pub(crate) fn review_comment_event(event: GhPullRequestReviewCommentEvent) -> HttpResponse {
    info!(
        message = "Pull request review comment event",
        action = ?event.action,
        pr_number = event.pull_request.number,
        repository_path = %event.repository.full_name,
        username = %event.sender.login,
    );

    HttpResponse::Accepted().body("Pull request review comment.")
}
