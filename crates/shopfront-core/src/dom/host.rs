//! [`PageHost`] adapter over the in-memory [`Document`].

use super::document::{Document, Element, ElementBuilder, NodeId};
use crate::config::{SelectorConfig, Selectors};
use crate::error::ShopfrontResult;
use crate::host::{Display, OverlayHandles, PageHost, Role, ScrollBehavior};
use crate::overlay::{OverlayContent, BACKDROP_STYLE, CLOSE_STYLE, DIALOG_STYLE};

/// A [`Document`] paired with the selectors that give its elements roles
#[derive(Debug, Clone)]
pub struct DomHost {
    document: Document,
    selectors: Selectors,
}

impl DomHost {
    pub fn new(document: Document, selectors: &SelectorConfig) -> ShopfrontResult<Self> {
        Ok(Self {
            document,
            selectors: selectors.resolve()?,
        })
    }

    /// Pair a document with already-resolved selectors
    pub fn with_selectors(document: Document, selectors: Selectors) -> Self {
        Self {
            document,
            selectors,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

impl PageHost for DomHost {
    type Node = NodeId;

    fn element(&self, role: Role) -> Option<NodeId> {
        let selector = match role {
            Role::SearchInput => &self.selectors.search_input,
            Role::SearchIcon => &self.selectors.search_icon,
            Role::BackToTop => &self.selectors.back_to_top,
            Role::PanelToggle => &self.selectors.panel_toggle,
            Role::PanelTarget => &self.selectors.panel_target,
        };
        self.document.query_selector(selector)
    }

    fn cards(&self) -> Vec<NodeId> {
        self.document.query_selector_all(&self.selectors.cards)
    }

    fn card_title(&self, card: NodeId) -> Option<String> {
        self.document
            .query_selector_within(card, &self.selectors.card_title)
            .map(|title| self.document.text_content(title))
    }

    fn enclosing_card(&self, node: NodeId) -> Option<NodeId> {
        self.document.closest(node, &self.selectors.card)
    }

    fn see_more_triggers(&self) -> Vec<NodeId> {
        self.document.query_selector_all(&self.selectors.see_more)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.document.parent(node)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document.get_element_by_id(id)
    }

    fn contains(&self, node: NodeId) -> bool {
        self.document.contains(node)
    }

    fn input_value(&self, node: NodeId) -> String {
        self.document.value(node).unwrap_or_default().to_string()
    }

    fn display(&self, node: NodeId) -> Display {
        Display::from_css_value(self.document.style(node, "display"))
    }

    fn active_element(&self) -> Option<NodeId> {
        self.document.active_element()
    }

    fn scroll_offset(&self) -> f64 {
        self.document.scroll_top()
    }

    fn set_display(&mut self, node: NodeId, display: Display) {
        self.document
            .set_style(node, "display", display.css_value());
    }

    fn set_cursor_pointer(&mut self, node: NodeId) {
        self.document.set_style(node, "cursor", "pointer");
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.document.scroll_to(0.0, behavior);
    }

    fn focus(&mut self, node: NodeId) {
        self.document.focus(node);
    }

    fn mount_overlay(&mut self, content: &OverlayContent) -> OverlayHandles<NodeId> {
        let root = self.document.create_element(styled("div", BACKDROP_STYLE));
        if let Some(element) = self.document.element_mut(root) {
            element.id = Some(content.id.clone());
        }

        let dialog = self.document.create_element(styled("div", DIALOG_STYLE));
        self.document.set_inner_html(dialog, content.markup());

        let mut close = ElementBuilder::new("button")
            .id(content.close_id.clone())
            .text(content.close_label.clone());
        for (property, value) in CLOSE_STYLE {
            close = close.style(property, value);
        }
        let close = self.document.append(dialog, close);

        self.document.append_child(root, dialog);
        let body = self.document.body();
        self.document.append_child(body, root);

        OverlayHandles {
            root,
            dialog,
            close,
        }
    }

    fn remove(&mut self, node: NodeId) {
        self.document.remove(node);
    }
}

fn styled(tag: &str, style: &[(&str, &str)]) -> Element {
    let mut element = Element::new(tag);
    for (property, value) in style {
        element
            .style
            .insert((*property).to_string(), (*value).to_string());
    }
    element
}
