use serde::{Deserialize, Serialize};

/// GitHub Team privacy.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhTeamPrivacy {
    /// Secret.
    #[default]
    Secret,
    /// Closed.
    Closed,
}

/// GitHub Team.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhTeam {
    /// ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Slug.
    pub slug: String,
    /// Description.
    pub description: Option<String>,
    /// Privacy.
    pub privacy: GhTeamPrivacy,
}
