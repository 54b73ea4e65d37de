//! Property-based tests for the search filter, panel toggle and escaping
//!
//! Uses proptest to check the behaviors against randomly generated pages.

use proptest::prelude::*;
use shopfront_core::dom::{Document, DomHost, ElementBuilder, NodeId};
use shopfront_core::{
    escape_html, Display, Key, Page, PageConfig, PageEvent, PageHost, Role, SearchQuery,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Card titles mixing case, spaces and markup-significant characters
fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 &<>'\"]{0,24}").expect("valid regex")
}

/// Queries, often padded with whitespace
fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ ]{0,2}[a-zA-Z&<]{0,4}[ ]{0,2}").expect("valid regex")
}

fn page_with_titles(titles: &[String]) -> (DomHost, Page<NodeId>) {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append(body, ElementBuilder::new("input").class("searchinput"));
    doc.append(body, ElementBuilder::new("div").class("searchicon"));
    doc.append(
        body,
        ElementBuilder::new("div")
            .class("panelall")
            .child(ElementBuilder::new("span").text("All")),
    );
    doc.append(body, ElementBuilder::new("div").class("panelops"));
    doc.append(
        body,
        ElementBuilder::new("div")
            .class("shop")
            .children(titles.iter().map(|title| {
                ElementBuilder::new("div").class("box").child(
                    ElementBuilder::new("div")
                        .class("boxcontent")
                        .child(ElementBuilder::new("h2").text(title.clone()))
                        .child(ElementBuilder::new("p").text("See more")),
                )
            })),
    );

    let config = PageConfig::default();
    let mut host = DomHost::new(doc, &config.selectors).expect("default selectors parse");
    let page = Page::init(&mut host, &config);
    (host, page)
}

fn search(host: &mut DomHost, page: &Page<NodeId>, query: &str) {
    let input = host.element(Role::SearchInput).expect("page has an input");
    host.document_mut().set_value(input, query);
    page.dispatch(
        host,
        PageEvent::KeyDown {
            target: Some(input),
            key: Key::Enter,
        },
    );
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A card is shown iff the trimmed, lowercased query is a substring of its lowercased title
    #[test]
    fn card_shown_iff_title_contains_query(
        titles in prop::collection::vec(title_strategy(), 0..12),
        query in query_strategy()
    ) {
        let (mut host, page) = page_with_titles(&titles);
        search(&mut host, &page, &query);

        let needle = query.trim().to_lowercase();
        let cards = host.cards();
        prop_assert_eq!(cards.len(), titles.len());

        for (card, title) in cards.into_iter().zip(&titles) {
            let expected = needle.is_empty() || title.to_lowercase().contains(&needle);
            let shown = host.display(card) == Display::Shown;
            prop_assert_eq!(shown, expected, "title {:?}, query {:?}", title, query);
        }
    }

    /// Clearing the query after any search restores every card
    #[test]
    fn clearing_query_restores_all(
        titles in prop::collection::vec(title_strategy(), 0..12),
        query in query_strategy()
    ) {
        let (mut host, page) = page_with_titles(&titles);
        search(&mut host, &page, &query);
        search(&mut host, &page, "");

        for card in host.cards() {
            prop_assert_eq!(host.display(card), Display::Shown);
        }
    }

    /// The query predicate agrees with the applied filter
    #[test]
    fn query_matches_is_case_insensitive(title in title_strategy(), query in query_strategy()) {
        let parsed = SearchQuery::parse(&query);
        prop_assert_eq!(parsed.matches(&title), parsed.matches(&title.to_uppercase()));
        prop_assert_eq!(parsed.matches(&title), parsed.matches(&title.to_lowercase()));
    }

    /// Toggling the panel an even number of times is the identity
    #[test]
    fn panel_toggle_even_clicks_restore(pairs in 1usize..6, start_hidden in any::<bool>()) {
        let (mut host, page) = page_with_titles(&[]);
        let trigger = host.element(Role::PanelToggle).expect("page has a toggle");
        let target = host.element(Role::PanelTarget).expect("page has a panel");
        if start_hidden {
            host.set_display(target, Display::Hidden);
        }
        let original = host.display(target);

        // Click the label inside the trigger; it bubbles up to the trigger
        let label = host.document().children(trigger)[0];
        for _ in 0..pairs * 2 {
            page.dispatch(&mut host, PageEvent::Click { target: label });
        }
        prop_assert_eq!(host.display(target), original);
    }

    /// Escaped text carries no raw markup characters
    #[test]
    fn escaped_text_has_no_markup(text in ".{0,64}") {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
        // Every `&` left over starts one of the five entities
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            prop_assert!(
                ["&amp;", "&quot;", "&#39;", "&lt;", "&gt;"].iter().any(|e| rest.starts_with(e)),
                "stray ampersand in {:?}", escaped
            );
        }
    }

    /// Escaping is reversible, so nothing is escaped twice
    #[test]
    fn escaping_is_not_doubled(text in "[a-z&<>'\" ]{0,32}") {
        let escaped = escape_html(&text);
        let restored = escaped
            .replace("&gt;", ">")
            .replace("&lt;", "<")
            .replace("&#39;", "'")
            .replace("&quot;", "\"")
            .replace("&amp;", "&");
        prop_assert_eq!(restored, text);
    }
}
