use serde::{Deserialize, Serialize};

/// GitHub Hook payload content type.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhHookContentType {
    /// JSON body.
    #[default]
    Json,
    /// JSONP body.
    Jsonp,
    /// XML body.
    Xml,
}

serde_plain::forward_display_to_serde!(GhHookContentType);
serde_plain::forward_from_str_to_serde!(GhHookContentType);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::GhHookContentType;

    #[test]
    fn to_str() {
        assert_eq!(GhHookContentType::Json.to_string(), "json");
        assert_eq!(GhHookContentType::Jsonp.to_string(), "jsonp");
        assert_eq!(GhHookContentType::Xml.to_string(), "xml");
    }

    #[test]
    fn from_str() {
        assert_eq!(
            "json".parse::<GhHookContentType>().unwrap(),
            GhHookContentType::Json
        );
        assert!("yaml".parse::<GhHookContentType>().is_err());
    }
}
