mod release;
mod release_action;
mod release_event;

pub use release::GhRelease;
pub use release_action::GhReleaseAction;
pub use release_event::GhReleaseEvent;
