//! Wiring the behaviors onto a page and routing events to them.
//!
//! [`Page::init`] is called once, after the host's document exists. It
//! resolves every element a behavior needs; anything missing disables only
//! that behavior. [`Page::dispatch`] then routes host events to whichever
//! behaviors are bound.

use crate::config::{OverlayConfig, PageConfig};
use crate::event::{Behavior, EventOutcome, Key, PageEvent};
use crate::host::{PageHost, Role};
use crate::overlay::{dismiss_preview, open_preview};
use crate::panel::{toggle_panel, PanelBinding};
use crate::scroll::scroll_to_top;
use crate::search::run_search;
use crate::shortcut::focus_search_shortcut;

/// Which behaviors ended up wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WiredBehaviors {
    /// Search icon click
    pub search_icon: bool,
    /// Enter in the search field, and the `/` shortcut
    pub search_input: bool,
    pub scroll_to_top: bool,
    pub panel_toggle: bool,
    pub preview_triggers: usize,
}

impl WiredBehaviors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Behaviors bound to one page
#[derive(Debug, Clone)]
pub struct Page<N> {
    overlay: OverlayConfig,
    search_input: Option<N>,
    search_icon: Option<N>,
    back_to_top: Option<N>,
    panel: Option<PanelBinding<N>>,
    see_more: Vec<N>,
}

impl<N: Copy + Eq + std::hash::Hash + std::fmt::Debug> Page<N> {
    /// Resolve elements and bind the behaviors.
    ///
    /// Clickable triggers get a pointer cursor.
    pub fn init<H: PageHost<Node = N>>(host: &mut H, config: &PageConfig) -> Self {
        let search_input = host.element(Role::SearchInput);
        let search_icon = host.element(Role::SearchIcon);
        let back_to_top = host.element(Role::BackToTop);
        let panel = match (
            host.element(Role::PanelToggle),
            host.element(Role::PanelTarget),
        ) {
            (Some(trigger), Some(target)) => Some(PanelBinding { trigger, target }),
            _ => None,
        };
        let see_more = host.see_more_triggers();

        if let Some(node) = back_to_top {
            host.set_cursor_pointer(node);
        }
        if let Some(binding) = panel {
            host.set_cursor_pointer(binding.trigger);
        }
        for &trigger in &see_more {
            host.set_cursor_pointer(trigger);
        }

        let page = Self {
            overlay: config.overlay.clone(),
            search_input,
            search_icon,
            back_to_top,
            panel,
            see_more,
        };

        let wired = page.wired();
        tracing::info!(
            search_icon = wired.search_icon,
            search_input = wired.search_input,
            scroll_to_top = wired.scroll_to_top,
            panel_toggle = wired.panel_toggle,
            preview_triggers = wired.preview_triggers,
            "Page wired"
        );
        page
    }

    pub fn wired(&self) -> WiredBehaviors {
        WiredBehaviors {
            search_icon: self.search_icon.is_some(),
            search_input: self.search_input.is_some(),
            scroll_to_top: self.back_to_top.is_some(),
            panel_toggle: self.panel.is_some(),
            preview_triggers: self.see_more.len(),
        }
    }

    /// Route one event to every behavior it concerns.
    pub fn dispatch<H: PageHost<Node = N>>(
        &self,
        host: &mut H,
        event: PageEvent<N>,
    ) -> EventOutcome {
        match event {
            PageEvent::Click { target } => self.on_click(host, target),
            PageEvent::KeyDown { target, key } => self.on_key_down(host, target, &key),
        }
    }

    /// Clicks bubble from the target up through its ancestors; each bound node
    /// on that path fires once, innermost first.
    fn on_click<H: PageHost<Node = N>>(&self, host: &mut H, target: N) -> EventOutcome {
        let path = propagation_path(host, target);
        let overlay_root = host.element_by_id(&self.overlay.id);
        let close_control = host.element_by_id(&self.overlay.close_id);
        let mut outcome = EventOutcome::default();

        for node in path {
            if self.search_icon == Some(node) {
                run_search(host, self.search_input);
                outcome.handled.push(Behavior::Search);
            }
            if self.back_to_top == Some(node) {
                scroll_to_top(host);
                outcome.handled.push(Behavior::ScrollToTop);
            }
            if let Some(binding) = self.panel {
                if binding.trigger == node {
                    toggle_panel(host, binding.target);
                    outcome.handled.push(Behavior::PanelToggle);
                }
            }
            if self.see_more.contains(&node) {
                open_preview(host, node, &self.overlay);
                outcome.handled.push(Behavior::OpenPreview);
            }
            if (close_control == Some(node) || overlay_root == Some(node))
                && dismiss_preview(host, &self.overlay)
            {
                outcome.handled.push(Behavior::ClosePreview);
            }
        }

        outcome
    }

    fn on_key_down<H: PageHost<Node = N>>(
        &self,
        host: &mut H,
        target: Option<N>,
        key: &Key,
    ) -> EventOutcome {
        let mut outcome = EventOutcome::default();

        if *key == Key::Enter && target.is_some() && target == self.search_input {
            run_search(host, self.search_input);
            outcome.handled.push(Behavior::Search);
        }

        if focus_search_shortcut(host, key, self.search_input) {
            outcome.default_prevented = true;
            outcome.handled.push(Behavior::FocusSearch);
        }

        outcome
    }
}

/// `target` followed by each of its ancestors
fn propagation_path<H: PageHost>(host: &H, target: H::Node) -> Vec<H::Node> {
    let mut path = vec![target];
    let mut current = host.parent(target);
    while let Some(node) = current {
        path.push(node);
        current = host.parent(node);
    }
    path
}
