//! Document View Component
//!
//! Root of the rendered page. Owns keyboard handling: every key press in the
//! window reaches this container, so the `/` shortcut works wherever focus is.
//! The runtime hands focus back here after the preview closes.

use dioxus::prelude::*;

use crate::components::NodeView;
use crate::runtime::{use_page_runtime, ROOT_ELEMENT_ID};

/// Render the whole document body
#[component]
pub fn DocumentView() -> Element {
    let runtime = use_page_runtime();
    let children = {
        let host = runtime.host();
        let host = host.read();
        let doc = host.document();
        doc.children(doc.body()).to_vec()
    };

    rsx! {
        div {
            id: ROOT_ELEMENT_ID,
            class: "shopfront-root",
            tabindex: "0",
            // Take focus on mount so window key presses land here
            onmounted: move |e: MountedEvent| async move {
                let _ = e.set_focus(true).await;
            },
            onkeydown: move |e: KeyboardEvent| {
                let outcome = runtime.key_down(&e.key().to_string());
                if outcome.default_prevented {
                    e.prevent_default();
                }
            },
            for child in children {
                NodeView { key: "{child.index()}", node: child }
            }
        }
    }
}
