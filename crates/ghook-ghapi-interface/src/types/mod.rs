//! GitHub types.

mod common;
mod hooks;
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

pub use common::{
    GhBranch, GhChanges, GhChangesField, GhCommit, GhCommitUser, GhInstallation, GhInvitation,
    GhLabel, GhLink, GhLinks, GhMembership, GhMilestone, GhMilestoneState, GhOrganization,
    GhRepository, GhTeam, GhTeamPrivacy, GhUser,
};
pub use hooks::{GhEvent, GhHook, GhHookConfig, GhHookContentType, GhHookCreation};
pub use organizations::{GhOrganizationAction, GhOrganizationEvent};
pub use ping::GhPingEvent;
pub use pulls::{
    GhPullRequest, GhPullRequestAction, GhPullRequestEvent, GhPullRequestReviewCommentEvent,
    GhPullRequestState, GhReviewComment, GhReviewCommentAction,
};
pub use push::GhPushEvent;
pub use releases::{GhRelease, GhReleaseAction, GhReleaseEvent};
pub use repositories::{GhRepositoryAction, GhRepositoryEvent};
pub use reviews::{GhPullRequestReviewEvent, GhReview, GhReviewAction, GhReviewState};
pub use statuses::{GhCommitStatusState, GhStatusBranch, GhStatusCommit, GhStatusEvent};
pub use teams::{GhTeamAction, GhTeamAddEvent, GhTeamEvent};
pub use watch::GhWatchEvent;
