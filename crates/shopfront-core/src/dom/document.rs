//! Arena-backed document tree.
//!
//! Removing a node frees its whole subtree. Freed slots are reused by later
//! elements; each slot carries a generation so a handle to a removed node
//! never resolves to whatever took its place.

use std::collections::BTreeMap;

use super::selector::Selector;
use crate::host::ScrollBehavior;

/// Handle to a node inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Arena index of this node. Reused once the node is removed.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}.{}", self.index, self.generation)
    }
}

/// A single element: tag, identity, text and inline style
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Lowercase tag name
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Own text, rendered before any children
    pub text: String,
    /// Pre-rendered markup, rendered before any children
    pub inner_html: Option<String>,
    /// Current value for form fields
    pub value: String,
    pub placeholder: Option<String>,
    /// Inline style properties in kebab-case
    pub style: BTreeMap<String, String>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Inline style serialized for a `style` attribute, e.g. `cursor: pointer; display: none`
    pub fn style_attribute(&self) -> String {
        self.style
            .iter()
            .map(|(prop, value)| format!("{}: {}", prop, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Side effects the in-memory document cannot carry out on its own.
///
/// An embedding host drains these with [`Document::take_effects`] and replays
/// them on the real view (e.g. a webview).
#[derive(Debug, Clone, PartialEq)]
pub enum HostEffect {
    ScrollTo { top: f64, behavior: ScrollBehavior },
    Focus(NodeId),
}

#[derive(Debug, Clone)]
struct Slot {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena entry; `slot` is `None` while the index sits on the free list
#[derive(Debug, Clone)]
struct Entry {
    generation: u32,
    slot: Option<Slot>,
}

/// In-memory document tree with a `body` root, focus and scroll state
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Entry>,
    free: Vec<usize>,
    body: NodeId,
    active: Option<NodeId>,
    scroll_top: f64,
    effects: Vec<HostEffect>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only `body`
    pub fn new() -> Self {
        Self {
            nodes: vec![Entry {
                generation: 0,
                slot: Some(Slot {
                    element: Element::new("body"),
                    parent: None,
                    children: Vec::new(),
                }),
            }],
            free: Vec::new(),
            body: NodeId {
                index: 0,
                generation: 0,
            },
            active: None,
            scroll_top: 0.0,
            effects: Vec::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    fn slot(&self, node: NodeId) -> Option<&Slot> {
        self.nodes
            .get(node.index)
            .filter(|entry| entry.generation == node.generation)
            .and_then(|entry| entry.slot.as_ref())
    }

    fn slot_mut(&mut self, node: NodeId) -> Option<&mut Slot> {
        self.nodes
            .get_mut(node.index)
            .filter(|entry| entry.generation == node.generation)
            .and_then(|entry| entry.slot.as_mut())
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.slot(node).map(|slot| &slot.element)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.slot_mut(node).map(|slot| &mut slot.element)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.slot(node).and_then(|slot| slot.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.slot(node)
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// Live nodes, attached or not, including the body
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Arena slots ever allocated, live or free
    pub fn allocated_slots(&self) -> usize {
        self.nodes.len()
    }

    // ========================================================================
    // Tree mutation
    // ========================================================================

    /// Create a detached element, reusing a freed slot when there is one
    pub fn create_element(&mut self, element: Element) -> NodeId {
        let slot = Slot {
            element,
            parent: None,
            children: Vec::new(),
        };
        if let Some(index) = self.free.pop() {
            let entry = &mut self.nodes[index];
            entry.slot = Some(slot);
            return NodeId {
                index,
                generation: entry.generation,
            };
        }

        self.nodes.push(Entry {
            generation: 0,
            slot: Some(slot),
        });
        NodeId {
            index: self.nodes.len() - 1,
            generation: 0,
        }
    }

    /// Attach `child` as the last child of `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child
            || self.slot(parent).is_none()
            || self.slot(child).is_none()
            || self.is_ancestor(child, parent)
        {
            return;
        }
        self.detach(child);
        if let Some(slot) = self.slot_mut(child) {
            slot.parent = Some(parent);
        }
        if let Some(slot) = self.slot_mut(parent) {
            slot.children.push(child);
        }
    }

    /// Build a subtree and append it under `parent`, returning the subtree root
    pub fn append(&mut self, parent: NodeId, builder: ElementBuilder) -> NodeId {
        let ElementBuilder { element, children } = builder;
        let node = self.create_element(element);
        for child in children {
            self.append(node, child);
        }
        self.append_child(parent, node);
        node
    }

    /// Remove `node` and free its whole subtree.
    ///
    /// Focus inside the removed subtree is dropped. The body cannot be removed.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.body || self.slot(node).is_none() {
            return;
        }
        if let Some(active) = self.active {
            if active == node || self.is_ancestor(node, active) {
                self.active = None;
            }
        }
        self.detach(node);

        let mut doomed = vec![node];
        while let Some(next) = doomed.pop() {
            let entry = &mut self.nodes[next.index];
            if let Some(slot) = entry.slot.take() {
                doomed.extend(slot.children);
                entry.generation = entry.generation.wrapping_add(1);
                self.free.push(next.index);
            }
        }
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.slot_mut(node).and_then(|slot| slot.parent.take()) else {
            return;
        };
        if let Some(slot) = self.slot_mut(parent) {
            slot.children.retain(|&c| c != node);
        }
    }

    /// Whether `ancestor` is a strict ancestor of `node`
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Whether `node` is attached under the body
    pub fn contains(&self, node: NodeId) -> bool {
        node == self.body || self.is_ancestor(self.body, node)
    }

    // ========================================================================
    // Content
    // ========================================================================

    /// Own text followed by all descendant text, in document order
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        if let Some(element) = self.element(node) {
            out.push_str(&element.text);
        }
        for &child in self.children(node) {
            self.collect_text(child, out);
        }
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(element) = self.element_mut(node) {
            element.text = text.into();
        }
    }

    pub fn set_inner_html(&mut self, node: NodeId, html: impl Into<String>) {
        if let Some(element) = self.element_mut(node) {
            element.inner_html = Some(html.into());
        }
    }

    pub fn value(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.value.as_str())
    }

    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        if let Some(element) = self.element_mut(node) {
            element.value = value.into();
        }
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)
            .and_then(|e| e.style.get(property))
            .map(String::as_str)
    }

    /// Set an inline style property. An empty value clears it.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(element) = self.element_mut(node) {
            if value.is_empty() {
                element.style.remove(property);
            } else {
                element.style.insert(property.to_string(), value.to_string());
            }
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Strict descendants of `root` in document order
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.query_selector_within(self.body, selector)
    }

    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|&n| selector.matches(self, n))
            .collect()
    }

    /// First strict descendant of `root` matched by `selector`
    pub fn query_selector_within(&self, root: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&n| selector.matches(self, n))
    }

    /// `node` itself or its nearest ancestor matched by `selector`
    pub fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if selector.matches(self, n) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// First attached element carrying `id`, in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|&n| self.element(n).and_then(|e| e.id.as_deref()) == Some(id))
    }

    // ========================================================================
    // Focus and scroll
    // ========================================================================

    pub fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    /// Focus an attached node and queue a [`HostEffect::Focus`]
    pub fn focus(&mut self, node: NodeId) {
        if !self.contains(node) {
            return;
        }
        self.active = Some(node);
        self.effects.push(HostEffect::Focus(node));
    }

    /// Record focus reported by the host without queueing an effect
    pub fn set_active(&mut self, node: Option<NodeId>) {
        self.active = node.filter(|&n| self.contains(n));
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Scroll to `top` (clamped at 0) and queue a [`HostEffect::ScrollTo`]
    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scroll_top = top.max(0.0);
        self.effects.push(HostEffect::ScrollTo {
            top: self.scroll_top,
            behavior,
        });
    }

    /// Record a scroll offset reported by the host
    pub fn set_scroll_top(&mut self, top: f64) {
        self.scroll_top = top.max(0.0);
    }

    pub fn take_effects(&mut self) -> Vec<HostEffect> {
        std::mem::take(&mut self.effects)
    }
}

/// Declarative builder for element subtrees
///
/// ```
/// use shopfront_core::dom::{Document, ElementBuilder};
///
/// let mut doc = Document::new();
/// let body = doc.body();
/// let card = doc.append(
///     body,
///     ElementBuilder::new("div")
///         .class("box")
///         .child(ElementBuilder::new("h2").text("Clothes")),
/// );
/// assert_eq!(doc.text_content(card), "Clothes");
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    element: Element,
    children: Vec<ElementBuilder>,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Self {
        Self {
            element: Element::new(tag),
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.element.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.element.classes.push(class.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.element.text = text.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.element.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.element.placeholder = Some(placeholder.into());
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.element
            .style
            .insert(property.to_string(), value.to_string());
        self
    }

    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementBuilder>) -> Self {
        self.children.extend(children);
        self
    }
}
