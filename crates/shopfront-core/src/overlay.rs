//! "See more" preview overlay.
//!
//! A full-viewport dimmed backdrop holding a small dialog with the card title,
//! a fixed line of copy and a close control. Only one overlay exists at a
//! time: opening a preview first removes whatever carries the overlay id.

use crate::config::OverlayConfig;
use crate::escape::escape_html;
use crate::host::{OverlayHandles, PageHost};

/// Inline style of the dimmed backdrop
pub const BACKDROP_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("left", "0"),
    ("top", "0"),
    ("width", "100vw"),
    ("height", "100vh"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("background-color", "rgba(0,0,0,0.5)"),
    ("z-index", "9999"),
    ("padding", "20px"),
    ("box-sizing", "border-box"),
];

/// Inline style of the dialog box
pub const DIALOG_STYLE: &[(&str, &str)] = &[
    ("background", "white"),
    ("color", "#111"),
    ("padding", "20px"),
    ("border-radius", "10px"),
    ("max-width", "90%"),
    ("text-align", "center"),
    ("box-shadow", "0 10px 30px rgba(0,0,0,0.3)"),
];

pub const CLOSE_STYLE: &[(&str, &str)] = &[
    ("padding", "8px 12px"),
    ("border", "none"),
    ("border-radius", "6px"),
    ("cursor", "pointer"),
];

/// Everything a host needs to build one overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayContent {
    pub id: String,
    pub close_id: String,
    /// Raw title; escaped by [`OverlayContent::markup`]
    pub title: String,
    pub description: String,
    pub close_label: String,
}

impl OverlayContent {
    pub fn new(config: &OverlayConfig, title: impl Into<String>) -> Self {
        Self {
            id: config.id.clone(),
            close_id: config.close_id.clone(),
            title: title.into(),
            description: config.description.clone(),
            close_label: config.close_label.clone(),
        }
    }

    /// Dialog markup (heading and description) with all text escaped.
    ///
    /// The close control is not part of the markup; hosts create it as a real
    /// element so it can be bound.
    pub fn markup(&self) -> String {
        format!(
            "<h3 style=\"margin-bottom:8px\">{}</h3><p style=\"margin-bottom:12px; color:#444\">{}</p>",
            escape_html(&self.title),
            escape_html(&self.description)
        )
    }
}

/// Title for the preview opened from `trigger`.
///
/// Falls back to the configured placeholder when the trigger sits outside any
/// card or the card has no (or an empty) title.
pub fn preview_title<H: PageHost>(host: &H, trigger: H::Node, config: &OverlayConfig) -> String {
    host.enclosing_card(trigger)
        .and_then(|card| host.card_title(card))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| config.fallback_title.clone())
}

/// Open the preview for `trigger`, replacing any overlay already shown.
pub fn open_preview<H: PageHost>(
    host: &mut H,
    trigger: H::Node,
    config: &OverlayConfig,
) -> OverlayHandles<H::Node> {
    let replaced = dismiss_preview(host, config);
    let title = preview_title(host, trigger, config);
    let content = OverlayContent::new(config, title);
    let handles = host.mount_overlay(&content);

    tracing::debug!(title = %content.title, replaced, "Opened preview overlay");
    handles
}

/// Remove every overlay carrying the configured id.
///
/// Returns whether anything was removed; dismissing with nothing open is a no-op.
pub fn dismiss_preview<H: PageHost>(host: &mut H, config: &OverlayConfig) -> bool {
    let mut removed = false;
    while let Some(overlay) = host.element_by_id(&config.id) {
        host.remove(overlay);
        if host.contains(overlay) {
            tracing::warn!(id = %config.id, "Host did not detach overlay");
            break;
        }
        removed = true;
    }
    if removed {
        tracing::debug!("Dismissed preview overlay");
    }
    removed
}
