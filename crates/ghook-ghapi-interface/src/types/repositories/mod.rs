mod repository_action;
mod repository_event;

pub use repository_action::GhRepositoryAction;
pub use repository_event::GhRepositoryEvent;
