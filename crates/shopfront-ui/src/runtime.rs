//! Page runtime context.
//!
//! Bundles the host document and the wired page so any component can
//! dispatch events without prop drilling.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let host = use_signal(|| host);
//! let page = use_signal(|| page);
//! use_context_provider(|| PageRuntime::new(host, page));
//!
//! // In child components
//! let runtime = use_page_runtime();
//! runtime.click(node);
//! ```

use dioxus::prelude::*;
use shopfront_core::dom::{DomHost, Element, HostEffect, NodeId};
use shopfront_core::{Behavior, EventOutcome, Key, Page, PageEvent, PageHost};

/// Webview id of the focusable container that receives every key press
pub const ROOT_ELEMENT_ID: &str = "shopfront-root";

/// Host document and page behaviors, shared through context
#[derive(Clone, Copy)]
pub struct PageRuntime {
    host: Signal<DomHost>,
    page: Signal<Page<NodeId>>,
}

impl PageRuntime {
    pub fn new(host: Signal<DomHost>, page: Signal<Page<NodeId>>) -> Self {
        Self { host, page }
    }

    pub fn host(&self) -> Signal<DomHost> {
        self.host
    }

    /// Dispatch an event, then replay any queued host effects in the webview.
    pub fn dispatch(&self, event: PageEvent<NodeId>) -> EventOutcome {
        let mut host = self.host;
        let outcome = {
            let page = self.page.read();
            let mut guard = host.write();
            page.dispatch(&mut *guard, event)
        };

        let effects = host.write().document_mut().take_effects();
        if !effects.is_empty() {
            let scripts: Vec<String> = {
                let guard = host.read();
                effects
                    .iter()
                    .filter_map(|effect| effect_script(&guard, effect))
                    .collect()
            };
            for script in scripts {
                run_script(script);
            }
        }
        if let Some(script) = refocus_root_script(&outcome) {
            run_script(script);
        }

        if outcome.is_handled() {
            tracing::debug!(handled = ?outcome.handled, "Dispatched page event");
        }
        outcome
    }

    pub fn click(&self, node: NodeId) -> EventOutcome {
        self.dispatch(PageEvent::Click { target: node })
    }

    /// Key press routed to whatever element currently has focus
    pub fn key_down(&self, key_name: &str) -> EventOutcome {
        let target = self.host.read().active_element();
        self.dispatch(PageEvent::KeyDown {
            target,
            key: Key::from_name(key_name),
        })
    }

    /// Mirror a form field edit into the document
    pub fn set_value(&self, node: NodeId, value: String) {
        let mut host = self.host;
        host.write().document_mut().set_value(node, value);
    }

    /// Mirror webview focus changes into the document
    pub fn focus_changed(&self, node: NodeId, focused: bool) {
        let mut host = self.host;
        let active = host.read().active_element();
        if focused {
            host.write().document_mut().set_active(Some(node));
        } else if active == Some(node) {
            host.write().document_mut().set_active(None);
        }
    }
}

/// Get the page runtime provided by the app
pub fn use_page_runtime() -> PageRuntime {
    use_context::<PageRuntime>()
}

/// Webview element id for a document node: its own id, or one derived from the handle
pub fn dom_id(node: NodeId, element: &Element) -> String {
    element
        .id
        .clone()
        .unwrap_or_else(|| format!("sf-node-{}", node.index()))
}

/// Script replaying `effect` in the webview; `None` if its node is gone
fn effect_script(host: &DomHost, effect: &HostEffect) -> Option<String> {
    match effect {
        HostEffect::ScrollTo { top, behavior } => Some(format!(
            "window.scrollTo({{ top: {}, behavior: '{}' }});",
            top,
            behavior.as_css()
        )),
        HostEffect::Focus(node) => {
            let element = host.document().element(*node)?;
            Some(focus_script(&dom_id(*node, element)))
        }
    }
}

fn focus_script(id: &str) -> String {
    let id = serde_json::Value::String(id.to_string());
    format!("document.getElementById({})?.focus();", id)
}

/// Closing the preview unmounts the close button, which may hold webview
/// focus. Focus goes back to the root so key presses keep reaching it.
fn refocus_root_script(outcome: &EventOutcome) -> Option<String> {
    outcome
        .ran(Behavior::ClosePreview)
        .then(|| focus_script(ROOT_ELEMENT_ID))
}

fn run_script(script: String) {
    let eval = dioxus::document::eval(&script);
    spawn(async move {
        if let Err(e) = eval.await {
            tracing::debug!(%script, "Webview script failed: {}", e);
        }
    });
}
