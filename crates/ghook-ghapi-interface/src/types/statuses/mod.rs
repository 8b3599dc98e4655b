mod commit_status_state;
mod status_branch;
mod status_event;

pub use commit_status_state::GhCommitStatusState;
pub use status_branch::{GhStatusBranch, GhStatusCommit};
pub use status_event::GhStatusEvent;
