//! `/` focuses the search field.

use crate::event::Key;
use crate::host::PageHost;

pub const FOCUS_SEARCH_KEY: char = '/';

/// Handle a global key press.
///
/// Returns `true` when the key was consumed and the host must suppress the
/// default character insertion. A `/` typed into the search field itself is
/// left alone.
pub fn focus_search_shortcut<H: PageHost>(
    host: &mut H,
    key: &Key,
    search_input: Option<H::Node>,
) -> bool {
    if *key != Key::Character(FOCUS_SEARCH_KEY) {
        return false;
    }
    let Some(input) = search_input else {
        return false;
    };
    if host.active_element() == Some(input) {
        return false;
    }

    host.focus(input);
    tracing::debug!("Focused search field via shortcut");
    true
}
