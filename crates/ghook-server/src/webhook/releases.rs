//! Release webhook handlers.

use actix_web::HttpResponse;
use ghook_ghapi_interface::types::GhReleaseEvent;
use tracing::info;

use super::parse_event_type;
use crate::{errors::Result, event_type::EventType};

pub(crate) fn parse_release_event(body: &str) -> Result<GhReleaseEvent> {
    parse_event_type(EventType::Release, body)
}

pub(crate) fn release_event(event: GhReleaseEvent) -> HttpResponse {
    info!(
        message = "Release event",
        action = ?event.action,
        tag_name = %event.release.tag_name,
        repository_path = %event.repository.full_name,
        username = %event.sender.login,
    );

    HttpResponse::Accepted().body("Release.")
}
