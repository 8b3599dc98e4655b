//! Team webhook handlers.

use actix_web::HttpResponse;
use ghook_ghapi_interface::types::{GhTeamAddEvent, GhTeamEvent};
use tracing::info;

use super::parse_event_type;
use crate::{errors::Result, event_type::EventType};

pub(crate) fn parse_team_event(body: &str) -> Result<GhTeamEvent> {
    parse_event_type(EventType::Team, body)
}

pub(crate) fn parse_team_add_event(body: &str) -> Result<GhTeamAddEvent> {
    parse_event_type(EventType::TeamAdd, body)
}

pub(crate) fn team_event(event: GhTeamEvent) -> HttpResponse {
    info!(
        message = "Team event",
        action = ?event.action,
        team_slug = %event.team.slug,
    );

    HttpResponse::Accepted().body("Team.")
}

pub(crate) fn team_add_event(event: GhTeamAddEvent) -> HttpResponse {
    info!(
        message = "Team add event",
        team_slug = %event.team.slug,
        repository_path = %event.repository.full_name,
    );

    HttpResponse::Accepted().body("Team add.")
}
