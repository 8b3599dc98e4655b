//! Status webhook handlers.

use actix_web::HttpResponse;
use ghook_ghapi_interface::types::GhStatusEvent;
use tracing::info;

use super::parse_event_type;
use crate::{errors::Result, event_type::EventType};

pub(crate) fn parse_status_event(body: &str) -> Result<GhStatusEvent> {
    parse_event_type(EventType::Status, body)
}

pub(crate) fn status_event(event: GhStatusEvent) -> HttpResponse {
    info!(
        message = "Status event",
        sha = %event.sha,
        state = %event.state,
        context = event.context.as_deref().unwrap_or(""),
    );

    HttpResponse::Accepted().body("Status.")
}
