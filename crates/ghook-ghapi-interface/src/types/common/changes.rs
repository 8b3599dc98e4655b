use serde::{Deserialize, Serialize};

/// GitHub Changes, attached to "edited" style events.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhChanges {
    /// Title changes.
    pub title: Option<GhChangesField>,
    /// Body changes.
    pub body: Option<GhChangesField>,
    /// Name changes.
    pub name: Option<GhChangesField>,
}

/// Previous value of an edited field.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhChangesField {
    /// Value before the edit.
    pub from: String,
}
