//! Ping webhook handlers.

use actix_web::{web, HttpResponse, Result as ActixResult};
use ghook_ghapi_interface::types::GhPingEvent;
use tracing::info;

use super::parse_event_type;
use crate::{
    errors::Result, event_type::EventType, server::AppContext, utils::convert_payload_to_string,
};

pub(crate) fn parse_ping_event(body: &str) -> Result<GhPingEvent> {
    parse_event_type(EventType::Ping, body)
}

pub(crate) fn ping_event(event: GhPingEvent) -> HttpResponse {
    if let Some(repo) = event.repository {
        info!(
            message = "Ping event from repository",
            repository_path = %repo.full_name,
            zen = %event.zen,
        );
    } else {
        info!(message = "Ping event without repository", zen = %event.zen);
    }

    HttpResponse::Accepted().body("Ping.")
}

/// Dedicated ping endpoint, echoing parse failures back to the sender.
#[tracing::instrument(skip_all)]
pub(crate) async fn pong_handler(
    mut payload: web::Payload,
    _ctx: web::Data<AppContext>,
) -> ActixResult<HttpResponse> {
    let body = match convert_payload_to_string(&mut payload).await {
        Ok(body) => body,
        Err(e) => return Ok(HttpResponse::BadRequest().body(e.to_string())),
    };

    match serde_json::from_str::<GhPingEvent>(&body) {
        Ok(event) => Ok(ping_event(event)),
        Err(e) => Ok(HttpResponse::BadRequest().body(e.to_string())),
    }
}
