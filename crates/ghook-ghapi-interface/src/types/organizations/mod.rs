mod organization_action;
mod organization_event;

pub use organization_action::GhOrganizationAction;
pub use organization_event::GhOrganizationEvent;
