//! Watch webhook handlers.

use actix_web::HttpResponse;
use ghook_ghapi_interface::types::GhWatchEvent;
use tracing::info;

use super::parse_event_type;
use crate::{errors::Result, event_type::EventType};

pub(crate) fn parse_watch_event(body: &str) -> Result<GhWatchEvent> {
    parse_event_type(EventType::Watch, body)
}

pub(crate) fn watch_event(event: GhWatchEvent) -> HttpResponse {
    info!(
        message = "Watch event",
        action = %event.action,
        repository_path = %event.repository.full_name,
        username = %event.sender.login,
    );

    HttpResponse::Accepted().body("Watch.")
}
