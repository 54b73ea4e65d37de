//! Back-to-top action.

use crate::host::{PageHost, ScrollBehavior};

/// Smoothly scroll the viewport back to offset 0.
pub fn scroll_to_top<H: PageHost>(host: &mut H) {
    let from = host.scroll_offset();
    host.scroll_to_top(ScrollBehavior::Smooth);
    tracing::debug!(from, "Scrolled to top");
}
