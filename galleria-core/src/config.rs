use serde::Deserialize;

/// Page-tunable settings, read from an optional JSON block embedded in
/// the page. Every field has a default so a missing or partial block
/// still yields a working configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Fade-out duration before a deleted card is removed from the
    /// document. Presentation only, not a correctness requirement.
    #[serde(default = "default_fade_delay_ms")]
    pub fade_delay_ms: u64,
    #[serde(default = "default_delete_endpoint")]
    pub delete_endpoint: String,
    /// Where to go after deleting an image outside a gallery card.
    #[serde(default = "default_gallery_root")]
    pub gallery_root: String,
    /// Skip the interactive confirmation prompt before deleting.
    #[serde(default)]
    pub skip_confirm: bool,
}

fn default_fade_delay_ms() -> u64 {
    200
}
fn default_delete_endpoint() -> String {
    "/delete".to_string()
}
fn default_gallery_root() -> String {
    "/".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fade_delay_ms: default_fade_delay_ms(),
            delete_endpoint: default_delete_endpoint(),
            gallery_root: default_gallery_root(),
            skip_confirm: false,
        }
    }
}

impl UiConfig {
    /// Parse a page-embedded JSON config block.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = UiConfig::from_json("{}").unwrap();
        assert_eq!(config.fade_delay_ms, 200);
        assert_eq!(config.delete_endpoint, "/delete");
        assert_eq!(config.gallery_root, "/");
        assert!(!config.skip_confirm);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config = UiConfig::from_json(r#"{"fade_delay_ms": 50, "skip_confirm": true}"#).unwrap();
        assert_eq!(config.fade_delay_ms, 50);
        assert!(config.skip_confirm);
        assert_eq!(config.delete_endpoint, "/delete");
    }

    #[test]
    fn malformed_json_is_a_typed_error() {
        assert!(UiConfig::from_json("not json").is_err());
    }
}
