//! Case-insensitive title filter over the listing cards.

use crate::host::{Display, PageHost};

/// A normalized search query: trimmed and lowercased
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a card with this title stays visible.
    ///
    /// The empty query matches everything.
    pub fn matches(&self, title: &str) -> bool {
        self.is_empty() || title.to_lowercase().contains(&self.0)
    }
}

/// How many cards a search left visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    pub shown: usize,
    pub hidden: usize,
}

/// Filter every card by the current value of `input`.
///
/// A missing input reads as the empty query, and a card without a title
/// compares as the empty string.
pub fn run_search<H: PageHost>(host: &mut H, input: Option<H::Node>) -> FilterSummary {
    let raw = input.map(|n| host.input_value(n)).unwrap_or_default();
    let query = SearchQuery::parse(&raw);
    let mut summary = FilterSummary::default();

    for card in host.cards() {
        let visible = if query.is_empty() {
            true
        } else {
            let title = host.card_title(card).unwrap_or_default();
            query.matches(&title)
        };

        if visible {
            host.set_display(card, Display::Shown);
            summary.shown += 1;
        } else {
            host.set_display(card, Display::Hidden);
            summary.hidden += 1;
        }
    }

    tracing::debug!(
        query = query.as_str(),
        shown = summary.shown,
        hidden = summary.hidden,
        "Applied search filter"
    );
    summary
}
