//! Edge case and boundary condition tests
//!
//! Pages missing elements, cards missing titles, stale handles and custom
//! selector configs. Nothing here should panic.

use std::io::Write;

use shopfront_core::dom::{Document, DomHost, ElementBuilder, NodeId};
use shopfront_core::{
    Behavior, Display, Key, Page, PageConfig, PageEvent, PageHost, Role, ShopfrontError,
};

fn host_for(doc: Document) -> (DomHost, Page<NodeId>) {
    let config = PageConfig::default();
    let mut host = DomHost::new(doc, &config.selectors).unwrap();
    let page = Page::init(&mut host, &config);
    (host, page)
}

fn overlay_markup(host: &DomHost) -> Option<String> {
    let overlay = host.element_by_id("simple-preview-overlay")?;
    let dialog = *host.document().children(overlay).first()?;
    host.document().element(dialog)?.inner_html.clone()
}

// ============================================================================
// Empty pages
// ============================================================================

/// A page with none of the role elements wires nothing
#[test]
fn test_empty_page_wires_nothing() {
    let mut doc = Document::new();
    let body = doc.body();
    let stray = doc.append(body, ElementBuilder::new("p").text("Hello"));
    let (mut host, page) = host_for(doc);

    assert!(page.wired().is_empty());

    let outcome = page.dispatch(&mut host, PageEvent::Click { target: stray });
    assert!(!outcome.is_handled());

    let outcome = page.dispatch(
        &mut host,
        PageEvent::KeyDown {
            target: None,
            key: Key::Character('/'),
        },
    );
    assert!(!outcome.default_prevented);
    assert_eq!(host.active_element(), None);
}

/// Search icon without an input reads as the empty query: everything shown
#[test]
fn test_search_without_input_shows_all() {
    let mut doc = Document::new();
    let body = doc.body();
    let icon = doc.append(body, ElementBuilder::new("span").class("searchicon"));
    let shop = doc.append(
        body,
        ElementBuilder::new("div").class("shop").child(
            ElementBuilder::new("div")
                .class("box")
                .style("display", "none")
                .child(ElementBuilder::new("h2").text("Clothes")),
        ),
    );
    let (mut host, page) = host_for(doc);
    assert!(page.wired().search_icon);
    assert!(!page.wired().search_input);

    let outcome = page.dispatch(&mut host, PageEvent::Click { target: icon });
    assert!(outcome.ran(Behavior::Search));

    let card = host.document().children(shop)[0];
    assert_eq!(host.display(card), Display::Shown);
}

/// Panel toggle needs both trigger and target
#[test]
fn test_panel_toggle_without_target_is_unwired() {
    let mut doc = Document::new();
    let body = doc.body();
    let trigger = doc.append(body, ElementBuilder::new("div").class("panelall"));
    let (mut host, page) = host_for(doc);

    assert!(!page.wired().panel_toggle);
    assert_eq!(host.document().style(trigger, "cursor"), None);

    let outcome = page.dispatch(&mut host, PageEvent::Click { target: trigger });
    assert!(!outcome.is_handled());
}

// ============================================================================
// Cards without titles
// ============================================================================

/// Untitled cards compare as the empty string
#[test]
fn test_untitled_card_hidden_by_any_query() {
    let mut doc = Document::new();
    let body = doc.body();
    let input = doc.append(
        body,
        ElementBuilder::new("input").class("searchinput").value("a"),
    );
    doc.append(
        body,
        ElementBuilder::new("div").class("shop").children([
            ElementBuilder::new("div").class("box"),
            ElementBuilder::new("div")
                .class("box")
                .child(ElementBuilder::new("h2").text("Apparel")),
        ]),
    );
    let (mut host, page) = host_for(doc);
    host.document_mut().set_active(Some(input));

    page.dispatch(
        &mut host,
        PageEvent::KeyDown {
            target: Some(input),
            key: Key::Enter,
        },
    );

    let cards = host.cards();
    assert_eq!(host.display(cards[0]), Display::Hidden);
    assert_eq!(host.display(cards[1]), Display::Shown);
}

/// Preview from a card without a heading falls back to "Details"
#[test]
fn test_preview_fallback_title_for_untitled_card() {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append(
        body,
        ElementBuilder::new("div").class("shop").child(
            ElementBuilder::new("div").class("box").child(
                ElementBuilder::new("div")
                    .class("boxcontent")
                    .child(ElementBuilder::new("p").text("See more")),
            ),
        ),
    );
    let (mut host, page) = host_for(doc);
    let trigger = host.see_more_triggers()[0];

    page.dispatch(&mut host, PageEvent::Click { target: trigger });

    let markup = overlay_markup(&host).unwrap();
    assert!(markup.contains(">Details</h3>"));
}

/// An empty heading also falls back to "Details"
#[test]
fn test_preview_fallback_title_for_empty_heading() {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append(
        body,
        ElementBuilder::new("div").class("box").child(
            ElementBuilder::new("div")
                .class("boxcontent")
                .child(ElementBuilder::new("h2"))
                .child(ElementBuilder::new("p").text("See more")),
        ),
    );
    let (mut host, page) = host_for(doc);
    let trigger = host.see_more_triggers()[0];

    page.dispatch(&mut host, PageEvent::Click { target: trigger });
    assert!(overlay_markup(&host).unwrap().contains(">Details</h3>"));
}

/// A trigger outside any card falls back to "Details"
#[test]
fn test_preview_trigger_outside_card() {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append(
        body,
        ElementBuilder::new("div")
            .class("boxcontent")
            .child(ElementBuilder::new("p").text("See more")),
    );
    let (mut host, page) = host_for(doc);
    let trigger = host.see_more_triggers()[0];

    page.dispatch(&mut host, PageEvent::Click { target: trigger });
    assert!(overlay_markup(&host).unwrap().contains(">Details</h3>"));
}

// ============================================================================
// Stray and stale overlays
// ============================================================================

/// Elements already carrying the overlay id are cleared before opening
#[test]
fn test_stray_overlays_are_removed_before_open() {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append(body, ElementBuilder::new("div").id("simple-preview-overlay"));
    doc.append(body, ElementBuilder::new("div").id("simple-preview-overlay"));
    doc.append(
        body,
        ElementBuilder::new("div").class("box").child(
            ElementBuilder::new("div")
                .class("boxcontent")
                .child(ElementBuilder::new("h2").text("Toys"))
                .child(ElementBuilder::new("p").text("See more")),
        ),
    );
    let (mut host, page) = host_for(doc);
    let trigger = host.see_more_triggers()[0];

    page.dispatch(&mut host, PageEvent::Click { target: trigger });

    let doc = host.document();
    let overlays = doc
        .descendants(doc.body())
        .into_iter()
        .filter(|&n| doc.element(n).and_then(|e| e.id.as_deref()) == Some("simple-preview-overlay"))
        .count();
    assert_eq!(overlays, 1);
    assert!(overlay_markup(&host).unwrap().contains(">Toys</h3>"));
}

/// Clicking a removed overlay node does nothing
#[test]
fn test_click_on_removed_overlay_is_noop() {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append(
        body,
        ElementBuilder::new("div").class("box").child(
            ElementBuilder::new("div")
                .class("boxcontent")
                .child(ElementBuilder::new("h2").text("Toys"))
                .child(ElementBuilder::new("p").text("See more")),
        ),
    );
    let (mut host, page) = host_for(doc);
    let trigger = host.see_more_triggers()[0];
    page.dispatch(&mut host, PageEvent::Click { target: trigger });
    let overlay = host.element_by_id("simple-preview-overlay").unwrap();
    page.dispatch(&mut host, PageEvent::Click { target: overlay });

    let outcome = page.dispatch(&mut host, PageEvent::Click { target: overlay });
    assert!(!outcome.is_handled());
}

/// Opening and dismissing the preview repeatedly reuses freed slots
#[test]
fn test_repeated_previews_do_not_grow_document() {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append(
        body,
        ElementBuilder::new("div").class("box").child(
            ElementBuilder::new("div")
                .class("boxcontent")
                .child(ElementBuilder::new("h2").text("Toys"))
                .child(ElementBuilder::new("p").text("See more")),
        ),
    );
    let (mut host, page) = host_for(doc);
    let trigger = host.see_more_triggers()[0];
    let live_before = host.document().node_count();

    page.dispatch(&mut host, PageEvent::Click { target: trigger });
    let first = host.element_by_id("simple-preview-overlay").unwrap();
    let allocated = host.document().allocated_slots();
    page.dispatch(&mut host, PageEvent::Click { target: first });
    assert_eq!(host.document().node_count(), live_before);
    assert_eq!(host.document().element(first), None);

    for _ in 0..1000 {
        page.dispatch(&mut host, PageEvent::Click { target: trigger });
        let overlay = host.element_by_id("simple-preview-overlay").unwrap();
        page.dispatch(&mut host, PageEvent::Click { target: overlay });
        assert_eq!(host.document().element(overlay), None);
    }

    assert_eq!(host.document().allocated_slots(), allocated);
    assert_eq!(host.document().node_count(), live_before);
}

// ============================================================================
// Focus edge cases
// ============================================================================

/// `/` still moves focus when another field has it
#[test]
fn test_slash_from_other_field_moves_focus() {
    let mut doc = Document::new();
    let body = doc.body();
    let search = doc.append(body, ElementBuilder::new("input").class("searchinput"));
    let other = doc.append(body, ElementBuilder::new("input").class("newsletter"));
    let (mut host, page) = host_for(doc);
    host.document_mut().set_active(Some(other));

    let outcome = page.dispatch(
        &mut host,
        PageEvent::KeyDown {
            target: Some(other),
            key: Key::Character('/'),
        },
    );

    assert!(outcome.default_prevented);
    assert_eq!(host.active_element(), Some(search));
}

// ============================================================================
// Configuration
// ============================================================================

/// Custom selectors re-target every behavior
#[test]
fn test_custom_selectors() {
    let config = PageConfig::from_json_str(
        r##"{
            "selectors": {
                "search_input": "#q",
                "cards": ".grid > article",
                "card": "article",
                "card_title": "h3",
                "see_more": "article button.more"
            },
            "overlay": { "fallback_title": "Product" }
        }"##,
    )
    .unwrap();

    let mut doc = Document::new();
    let body = doc.body();
    doc.append(body, ElementBuilder::new("input").id("q").value("lamp"));
    doc.append(
        body,
        ElementBuilder::new("section").class("grid").children([
            ElementBuilder::new("article")
                .child(ElementBuilder::new("h3").text("Desk Lamp"))
                .child(ElementBuilder::new("button").class("more").text("More")),
            ElementBuilder::new("article")
                .child(ElementBuilder::new("button").class("more").text("More")),
        ]),
    );

    let mut host = DomHost::new(doc, &config.selectors).unwrap();
    let page = Page::init(&mut host, &config);
    assert_eq!(page.wired().preview_triggers, 2);

    let input = host.element(Role::SearchInput).unwrap();
    page.dispatch(
        &mut host,
        PageEvent::KeyDown {
            target: Some(input),
            key: Key::Enter,
        },
    );
    let cards = host.cards();
    assert_eq!(host.display(cards[0]), Display::Shown);
    assert_eq!(host.display(cards[1]), Display::Hidden);

    let untitled = host.see_more_triggers()[1];
    page.dispatch(&mut host, PageEvent::Click { target: untitled });
    assert!(overlay_markup(&host).unwrap().contains(">Product</h3>"));
}

/// Config files load from disk; bad selectors fail at load time
#[test]
fn test_config_file_loading() {
    let dir = tempfile::TempDir::new().unwrap();

    let good = dir.path().join("page.json");
    let mut file = std::fs::File::create(&good).unwrap();
    writeln!(file, r#"{{ "selectors": {{ "card_title": "h3" }} }}"#).unwrap();
    let config = PageConfig::load_or_default(Some(&good)).unwrap();
    assert_eq!(config.selectors.card_title, "h3");

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{ "selectors": { "see_more": "p >" } }"#).unwrap();
    assert!(matches!(
        PageConfig::load(&bad),
        Err(ShopfrontError::InvalidSelector { .. })
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        PageConfig::load_or_default(Some(&missing)),
        Err(ShopfrontError::Io(_))
    ));
}
