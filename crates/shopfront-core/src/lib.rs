//! Shopfront Core Library
//!
//! Client-side interactivity for a static product-listing page.
//!
//! ## Overview
//!
//! Five independent behaviors act on a document owned by a rendering host:
//!
//! - **Search filter**: show only cards whose title contains the query
//! - **Scroll to top**: smooth scroll back to offset 0
//! - **Panel toggle**: show/hide the navigation panel
//! - **Preview overlay**: "see more" opens a modal with the card title
//! - **Keyboard shortcut**: `/` focuses the search field
//!
//! The host is abstracted behind [`PageHost`]. [`dom::DomHost`] implements it
//! over an in-memory [`dom::Document`], which the desktop app renders.
//!
//! ## Quick Start
//!
//! ```
//! use shopfront_core::dom::{Document, DomHost, ElementBuilder};
//! use shopfront_core::{Page, PageConfig, PageEvent, PageHost};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! doc.append(
//!     body,
//!     ElementBuilder::new("div").class("shop").child(
//!         ElementBuilder::new("div").class("box").child(
//!             ElementBuilder::new("div")
//!                 .class("boxcontent")
//!                 .child(ElementBuilder::new("h2").text("Clothes"))
//!                 .child(ElementBuilder::new("p").text("See more")),
//!         ),
//!     ),
//! );
//!
//! let config = PageConfig::default();
//! let mut host = DomHost::new(doc, &config.selectors).unwrap();
//! let page = Page::init(&mut host, &config);
//!
//! let trigger = host.see_more_triggers()[0];
//! page.dispatch(&mut host, PageEvent::Click { target: trigger });
//! assert!(host.element_by_id("simple-preview-overlay").is_some());
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod escape;
pub mod event;
pub mod host;
pub mod logging;
pub mod overlay;
pub mod page;
pub mod panel;
pub mod scroll;
pub mod search;
pub mod shortcut;

// Re-exports
pub use config::{OverlayConfig, PageConfig, SelectorConfig, Selectors};
pub use error::{ShopfrontError, ShopfrontResult};
pub use escape::escape_html;
pub use event::{Behavior, EventOutcome, Key, PageEvent};
pub use host::{Display, OverlayHandles, PageHost, Role, ScrollBehavior};
pub use overlay::OverlayContent;
pub use page::{Page, WiredBehaviors};
pub use search::{FilterSummary, SearchQuery};
