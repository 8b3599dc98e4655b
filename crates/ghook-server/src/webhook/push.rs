//! Push webhook handlers.

use actix_web::HttpResponse;
use ghook_ghapi_interface::types::GhPushEvent;
use tracing::info;

use super::parse_event_type;
use crate::{errors::Result, event_type::EventType};

pub(crate) fn parse_push_event(body: &str) -> Result<GhPushEvent> {
    parse_event_type(EventType::Push, body)
}

pub(crate) fn push_event(event: GhPushEvent) -> HttpResponse {
    info!(
        message = "Push event",
        reference = %event.reference,
        head = %event.head,
        commit_count = event.commit_count,
        repository_path = %event.repository.full_name,
    );

    HttpResponse::Accepted().body("Push.")
}
