use dioxus::prelude::*;
use shopfront_core::dom::{DomHost, NodeId};
use shopfront_core::{Page, PageConfig, Selectors};
use shopfront_ui::components::DocumentView;
use shopfront_ui::PageRuntime;

use crate::catalog::listing_document;
use crate::theme::GLOBAL_STYLES;

/// Build the listing document and wire page behaviors onto it.
///
/// Selectors were validated when the config loaded; an invalid set here
/// only happens if the config was never loaded, so fall back to the stock ones.
fn build_page(config: &PageConfig) -> (DomHost, Page<NodeId>) {
    let document = listing_document();
    let mut host = match config.selectors.resolve() {
        Ok(selectors) => DomHost::with_selectors(document, selectors),
        Err(e) => {
            tracing::error!("Invalid page selectors, using defaults: {}", e);
            DomHost::with_selectors(document, Selectors::default())
        }
    };
    let page = Page::init(&mut host, config);
    (host, page)
}

/// Root application component.
///
/// Provides global styles and the page runtime context.
#[component]
pub fn App() -> Element {
    let initial = use_hook(|| build_page(&crate::get_page_config()));
    let host = use_signal(|| initial.0.clone());
    let page = use_signal(|| initial.1.clone());

    use_context_provider(|| PageRuntime::new(host, page));

    rsx! {
        style { {GLOBAL_STYLES} }
        DocumentView {}
    }
}
