use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Thumbnail size selected in the gallery toolbar.
///
/// The token doubles as the selector button's `data-size` attribute
/// and the suffix of the page-level CSS class (`size-small` etc.),
/// and is what gets persisted in durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl ThumbSize {
    /// All sizes, in toolbar order.
    pub const ALL: [ThumbSize; 3] = [ThumbSize::Small, ThumbSize::Medium, ThumbSize::Large];

    pub fn token(self) -> &'static str {
        match self {
            ThumbSize::Small => "small",
            ThumbSize::Medium => "medium",
            ThumbSize::Large => "large",
        }
    }

    /// Page-level state class applied to the document body.
    pub fn css_class(self) -> String {
        format!("size-{}", self.token())
    }

    /// Parse a stored or clicked size token.
    pub fn parse(token: &str) -> crate::Result<Self> {
        match token {
            "small" => Ok(ThumbSize::Small),
            "medium" => Ok(ThumbSize::Medium),
            "large" => Ok(ThumbSize::Large),
            other => Err(CoreError::UnknownSize(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        for size in ThumbSize::ALL {
            assert_eq!(ThumbSize::parse(size.token()).unwrap(), size);
        }
    }

    #[test]
    fn unknown_token_is_an_error() {
        assert!(ThumbSize::parse("enormous").is_err());
        assert!(ThumbSize::parse("").is_err());
        // Tokens are case-sensitive, matching the data attributes.
        assert!(ThumbSize::parse("Small").is_err());
    }

    #[test]
    fn css_class_carries_the_token() {
        assert_eq!(ThumbSize::Small.css_class(), "size-small");
        assert_eq!(ThumbSize::Large.css_class(), "size-large");
    }

    #[test]
    fn default_is_small() {
        assert_eq!(ThumbSize::default(), ThumbSize::Small);
    }
}
