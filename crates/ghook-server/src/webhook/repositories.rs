//! Repository webhook handlers.

use actix_web::HttpResponse;
use ghook_ghapi_interface::types::GhRepositoryEvent;
use tracing::info;

use super::parse_event_type;
use crate::{errors::Result, event_type::EventType};

pub(crate) fn parse_repository_event(body: &str) -> Result<GhRepositoryEvent> {
    parse_event_type(EventType::Repository, body)
}

pub(crate) fn repository_event(event: GhRepositoryEvent) -> HttpResponse {
    info!(
        message = "Repository event",
        action = ?event.action,
        repository_path = %event.repository.full_name,
        username = %event.sender.login,
    );

    HttpResponse::Accepted().body("Repository.")
}
