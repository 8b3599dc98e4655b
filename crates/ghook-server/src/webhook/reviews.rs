//! Review webhook handlers.

use actix_web::HttpResponse;
use ghook_ghapi_interface::types::GhPullRequestReviewEvent;
use tracing::info;

use super::parse_event_type;
use crate::{errors::Result, event_type::EventType};

pub(crate) fn parse_review_event(body: &str) -> Result<GhPullRequestReviewEvent> {
    parse_event_type(EventType::PullRequestReview, body)
}

pub(crate) fn review_event(event: GhPullRequestReviewEvent) -> HttpResponse {
    info!(
        message = "Pull request review event",
        action = ?event.action,
        state = %event.review.state,
        pr_number = event.pull_request.number,
        repository_path = %event.repository.full_name,
        username = %event.sender.login,
    );

    HttpResponse::Accepted().body("Pull request review.")
}
