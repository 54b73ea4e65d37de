//! Show/hide toggle for the navigation panel.

use crate::host::{Display, PageHost};

/// A trigger and the panel it shows or hides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelBinding<N> {
    pub trigger: N,
    pub target: N,
}

/// Invert the inline visibility of `target` and return the new state.
pub fn toggle_panel<H: PageHost>(host: &mut H, target: H::Node) -> Display {
    let next = host.display(target).toggled();
    host.set_display(target, next);
    tracing::debug!(?next, "Toggled panel");
    next
}
