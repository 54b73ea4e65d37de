//! The rendering-host boundary.
//!
//! Behaviors never walk the document themselves. Everything they need from the
//! page ("which node is the search field", "what is this card's title") is a
//! capability on [`PageHost`], and how it is answered is up to the adapter.

use std::fmt::Debug;
use std::hash::Hash;

use crate::overlay::OverlayContent;

/// Single elements a page may provide, each wiring one behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    SearchInput,
    SearchIcon,
    BackToTop,
    PanelToggle,
    PanelTarget,
}

/// Inline visibility of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No inline override; the element renders with its stylesheet display
    #[default]
    Shown,
    /// Inline `display: none`
    Hidden,
}

impl Display {
    /// Value written to the inline `display` property
    pub fn css_value(&self) -> &'static str {
        match self {
            Display::Shown => "",
            Display::Hidden => "none",
        }
    }

    pub fn from_css_value(value: Option<&str>) -> Self {
        match value {
            Some("none") => Display::Hidden,
            _ => Display::Shown,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Display::Shown => Display::Hidden,
            Display::Hidden => Display::Shown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

impl ScrollBehavior {
    pub fn as_css(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}

/// Nodes created for one preview overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayHandles<N> {
    /// Full-viewport dimmed backdrop, child of the body
    pub root: N,
    /// The centered dialog box
    pub dialog: N,
    /// The close control inside the dialog
    pub close: N,
}

/// Capabilities the behaviors need from a rendering host.
///
/// All lookups are optional; a `None` simply disables whatever depended on it.
/// Implementations must not panic on handles that have since been removed.
pub trait PageHost {
    /// Opaque element handle
    type Node: Copy + Eq + Hash + Debug;

    // --- lookups ---

    /// The element playing `role`, if the page has one
    fn element(&self, role: Role) -> Option<Self::Node>;

    /// Every listing card, in document order
    fn cards(&self) -> Vec<Self::Node>;

    /// Title text of a card, if it has a title element
    fn card_title(&self, card: Self::Node) -> Option<String>;

    /// The card enclosing `node` (or `node` itself if it is a card)
    fn enclosing_card(&self, node: Self::Node) -> Option<Self::Node>;

    /// Every "see more" trigger, in document order
    fn see_more_triggers(&self) -> Vec<Self::Node>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn contains(&self, node: Self::Node) -> bool;

    // --- reads ---

    /// Current text of a form field; empty when the node is gone
    fn input_value(&self, node: Self::Node) -> String;

    fn display(&self, node: Self::Node) -> Display;

    fn active_element(&self) -> Option<Self::Node>;

    fn scroll_offset(&self) -> f64;

    // --- writes ---

    fn set_display(&mut self, node: Self::Node, display: Display);

    fn set_cursor_pointer(&mut self, node: Self::Node);

    fn scroll_to_top(&mut self, behavior: ScrollBehavior);

    fn focus(&mut self, node: Self::Node);

    /// Build the overlay subtree for `content` and attach it to the body
    fn mount_overlay(&mut self, content: &OverlayContent) -> OverlayHandles<Self::Node>;

    fn remove(&mut self, node: Self::Node);
}
