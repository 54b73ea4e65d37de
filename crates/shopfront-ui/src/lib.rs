//! Shopfront UI Components
//!
//! Dioxus components that render a `shopfront-core` document and feed user
//! input back into the page behaviors.
//!
//! ## Data Flow
//!
//! - The app owns a [`DomHost`](shopfront_core::dom::DomHost) and a
//!   [`Page`](shopfront_core::Page) in signals, bundled as a [`PageRuntime`]
//! - [`DocumentView`] renders the document tree, one [`NodeView`] per element
//! - Clicks and key presses become `PageEvent`s dispatched through the runtime
//! - Host effects (smooth scroll, input focus) are replayed in the webview

pub mod components;
pub mod runtime;

pub use components::*;
pub use runtime::{dom_id, use_page_runtime, PageRuntime, ROOT_ELEMENT_ID};
