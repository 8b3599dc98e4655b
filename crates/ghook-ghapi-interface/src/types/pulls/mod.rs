mod pull_request;
mod pull_request_action;
mod pull_request_event;
mod pull_request_state;
mod review_comment;
mod review_comment_event;

pub use pull_request::GhPullRequest;
pub use pull_request_action::GhPullRequestAction;
pub use pull_request_event::GhPullRequestEvent;
pub use pull_request_state::GhPullRequestState;
pub use review_comment::{GhReviewComment, GhReviewCommentAction};
pub use review_comment_event::GhPullRequestReviewCommentEvent;
