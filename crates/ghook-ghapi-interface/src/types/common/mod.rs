mod branch;
mod changes;
mod commit;
mod commit_user;
mod installation;
mod invitation;
mod label;
mod links;
mod membership;
mod milestone;
mod organization;
mod repository;
mod team;
mod user;

pub use branch::GhBranch;
pub use changes::{GhChanges, GhChangesField};
pub use commit::GhCommit;
pub use commit_user::GhCommitUser;
pub use installation::GhInstallation;
pub use invitation::GhInvitation;
pub use label::GhLabel;
pub use links::{GhLink, GhLinks};
pub use membership::GhMembership;
pub use milestone::{GhMilestone, GhMilestoneState};
pub use organization::GhOrganization;
pub use repository::GhRepository;
pub use team::{GhTeam, GhTeamPrivacy};
pub use user::GhUser;
