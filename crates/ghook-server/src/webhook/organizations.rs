//! Organization webhook handlers.

use actix_web::HttpResponse;
use ghook_ghapi_interface::types::GhOrganizationEvent;
use tracing::info;

use super::parse_event_type;
use crate::{errors::Result, event_type::EventType};

pub(crate) fn parse_organization_event(body: &str) -> Result<GhOrganizationEvent> {
    parse_event_type(EventType::Organization, body)
}

pub(crate) fn organization_event(event: GhOrganizationEvent) -> HttpResponse {
    info!(
        message = "Organization event",
        action = ?event.action,
        organization = event
            .organization
            .as_ref()
            .map(|o| o.login.as_str())
            .unwrap_or(""),
    );

    HttpResponse::Accepted().body("Organization.")
}
