//! Page configuration.
//!
//! Which elements play which role and what the preview overlay says. Every
//! field has a default matching the stock listing page, so an empty JSON
//! object (or no config file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dom::Selector;
use crate::error::ShopfrontResult;

/// Selectors locating each element the behaviors act on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub search_input: String,
    pub search_icon: String,
    /// All listing cards
    pub cards: String,
    /// A single card, used to find the card enclosing a trigger
    pub card: String,
    /// Title element within a card
    pub card_title: String,
    pub back_to_top: String,
    pub panel_toggle: String,
    pub panel_target: String,
    pub see_more: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            search_input: ".searchinput".to_string(),
            search_icon: ".searchicon".to_string(),
            cards: ".shop .box".to_string(),
            card: ".box".to_string(),
            card_title: "h2".to_string(),
            back_to_top: ".footpanel1".to_string(),
            panel_toggle: ".panelall".to_string(),
            panel_target: ".panelops".to_string(),
            see_more: ".boxcontent > p".to_string(),
        }
    }
}

/// Parsed form of [`SelectorConfig`]
#[derive(Debug, Clone)]
pub struct Selectors {
    pub search_input: Selector,
    pub search_icon: Selector,
    pub cards: Selector,
    pub card: Selector,
    pub card_title: Selector,
    pub back_to_top: Selector,
    pub panel_toggle: Selector,
    pub panel_target: Selector,
    pub see_more: Selector,
}

impl Default for Selectors {
    /// The stock selectors, built without parsing
    fn default() -> Self {
        Self {
            search_input: Selector::class("searchinput"),
            search_icon: Selector::class("searchicon"),
            cards: Selector::class("shop").descendant(Selector::class("box")),
            card: Selector::class("box"),
            card_title: Selector::tag("h2"),
            back_to_top: Selector::class("footpanel1"),
            panel_toggle: Selector::class("panelall"),
            panel_target: Selector::class("panelops"),
            see_more: Selector::class("boxcontent").child(Selector::tag("p")),
        }
    }
}

impl SelectorConfig {
    /// Parse every selector, failing on the first invalid one.
    pub fn resolve(&self) -> ShopfrontResult<Selectors> {
        Ok(Selectors {
            search_input: Selector::parse(&self.search_input)?,
            search_icon: Selector::parse(&self.search_icon)?,
            cards: Selector::parse(&self.cards)?,
            card: Selector::parse(&self.card)?,
            card_title: Selector::parse(&self.card_title)?,
            back_to_top: Selector::parse(&self.back_to_top)?,
            panel_toggle: Selector::parse(&self.panel_toggle)?,
            panel_target: Selector::parse(&self.panel_target)?,
            see_more: Selector::parse(&self.see_more)?,
        })
    }
}

/// Identity and copy of the preview overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Element id of the backdrop; at most one element carries it
    pub id: String,
    pub close_id: String,
    /// Shown when the trigger has no enclosing card or the card has no title
    pub fallback_title: String,
    pub description: String,
    pub close_label: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            id: "simple-preview-overlay".to_string(),
            close_id: "closePreviewBtn".to_string(),
            fallback_title: "Details".to_string(),
            description: "This is a demo preview. Click anywhere to close.".to_string(),
            close_label: "Close".to_string(),
        }
    }
}

/// Complete page configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: SelectorConfig,
    pub overlay: OverlayConfig,
}

impl PageConfig {
    /// Parse from JSON and validate selectors
    pub fn from_json_str(json: &str) -> ShopfrontResult<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.selectors.resolve()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ShopfrontResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> ShopfrontResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Platform config location: `<config dir>/shopfront/page.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shopfront").join("page.json"))
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must load. Without one, the platform default is used
    /// when it exists, otherwise built-in defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> ShopfrontResult<Self> {
        if let Some(path) = explicit {
            tracing::info!(path = %path.display(), "Loading page config");
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "Loading page config");
                Self::load(&path)
            }
            _ => {
                tracing::debug!("No page config found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShopfrontError;

    #[test]
    fn defaults_resolve() {
        let config = PageConfig::default();
        let selectors = config.selectors.resolve().unwrap();
        assert_eq!(selectors.cards.to_string(), ".shop .box");
        assert_eq!(selectors.see_more.to_string(), ".boxcontent > p");
        assert_eq!(config.overlay.fallback_title, "Details");
    }

    #[test]
    fn stock_selectors_match_default_config() {
        let parsed = SelectorConfig::default().resolve().unwrap();
        let stock = Selectors::default();
        assert_eq!(parsed.search_input, stock.search_input);
        assert_eq!(parsed.search_icon, stock.search_icon);
        assert_eq!(parsed.cards, stock.cards);
        assert_eq!(parsed.card, stock.card);
        assert_eq!(parsed.card_title, stock.card_title);
        assert_eq!(parsed.back_to_top, stock.back_to_top);
        assert_eq!(parsed.panel_toggle, stock.panel_toggle);
        assert_eq!(parsed.panel_target, stock.panel_target);
        assert_eq!(parsed.see_more, stock.see_more);
    }

    #[test]
    fn empty_object_is_default() {
        let config = PageConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json_str(
            r#"{ "selectors": { "card_title": "h3" }, "overlay": { "close_label": "Dismiss" } }"#,
        )
        .unwrap();
        assert_eq!(config.selectors.card_title, "h3");
        assert_eq!(config.selectors.search_input, ".searchinput");
        assert_eq!(config.overlay.close_label, "Dismiss");
        assert_eq!(config.overlay.id, "simple-preview-overlay");
    }

    #[test]
    fn invalid_selector_is_rejected() {
        let err = PageConfig::from_json_str(r#"{ "selectors": { "cards": ".shop >" } }"#)
            .unwrap_err();
        assert!(matches!(err, ShopfrontError::InvalidSelector { .. }));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = PageConfig::from_json_str("{ selectors").unwrap_err();
        assert!(matches!(err, ShopfrontError::Config(_)));
    }

    #[test]
    fn json_roundtrip() {
        let config = PageConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(PageConfig::from_json_str(&json).unwrap(), config);
    }
}
