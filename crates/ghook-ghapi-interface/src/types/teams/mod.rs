mod team_action;
mod team_add_event;
mod team_event;

pub use team_action::GhTeamAction;
pub use team_add_event::GhTeamAddEvent;
pub use team_event::GhTeamEvent;
