//! Webhook handlers.

mod organizations;
mod ping;
mod pulls;
mod push;
mod releases;
mod repositories;
mod reviews;
mod statuses;
mod teams;
mod watch;

#[cfg(test)]
mod tests;

use std::convert::TryFrom;

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Deserialize;

use crate::{
    constants::GITHUB_EVENT_HEADER, event_type::EventType, server::AppContext,
    utils::convert_payload_to_string, Result, ServerError,
};

#[tracing::instrument(skip_all, fields(event_type))]
fn parse_event(event_type: EventType, body: &str) -> Result<HttpResponse> {
    match event_type {
        EventType::Organization => Ok(organizations::organization_event(
            organizations::parse_organization_event(body)?,
        )),
        EventType::Ping => Ok(ping::ping_event(ping::parse_ping_event(body)?)),
        EventType::PullRequest => Ok(pulls::pull_request_event(pulls::parse_pull_request_event(
            body,
        )?)),
        EventType::PullRequestReview => Ok(reviews::review_event(reviews::parse_review_event(
            body,
        )?)),
        EventType::PullRequestReviewComment => Ok(pulls::review_comment_event(
            pulls::parse_review_comment_event(body)?,
        )),
        EventType::Push => Ok(push::push_event(push::parse_push_event(body)?)),
        EventType::Release => Ok(releases::release_event(releases::parse_release_event(
            body,
        )?)),
        EventType::Repository => Ok(repositories::repository_event(
            repositories::parse_repository_event(body)?,
        )),
        EventType::Status => Ok(statuses::status_event(statuses::parse_status_event(body)?)),
        EventType::Team => Ok(teams::team_event(teams::parse_team_event(body)?)),
        EventType::TeamAdd => Ok(teams::team_add_event(teams::parse_team_add_event(body)?)),
        EventType::Watch => Ok(watch::watch_event(watch::parse_watch_event(body)?)),
    }
}

fn parse_event_type<'de, T>(event_type: EventType, body: &'de str) -> Result<T>
where
    T: Deserialize<'de>,
{
    serde_json::from_str(body).map_err(|e| ServerError::EventParseError {
        event_type,
        source: e,
    })
}

fn extract_event_from_request(req: &HttpRequest) -> Option<EventType> {
    req.headers()
        .get(GITHUB_EVENT_HEADER)
        .and_then(|x| x.to_str().ok())
        .and_then(|x| EventType::try_from(x).ok())
}

#[tracing::instrument(skip_all)]
pub(crate) async fn event_handler(
    req: HttpRequest,
    mut payload: web::Payload,
    _ctx: web::Data<AppContext>,
) -> ActixResult<HttpResponse> {
    // Route event depending on header, unhandled events are acknowledged untouched
    if let Some(event_type) = extract_event_from_request(&req) {
        if let Ok(body) = convert_payload_to_string(&mut payload).await {
            parse_event(event_type, &body).map_err(Into::into)
        } else {
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Bad payload for event '{}'.", event_type)
            })))
        }
    } else {
        Ok(HttpResponse::Ok().finish())
    }
}

pub(crate) use ping::pong_handler;

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    // GitHub probes hook endpoints with various methods, acknowledge them all
    cfg.service(web::resource("/").route(web::route().to(event_handler)));
}
