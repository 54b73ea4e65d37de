//! Events fed into a [`crate::Page`] and what dispatching them did.

/// A key as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Character(char),
    Other(String),
}

impl Key {
    /// Parse a DOM-style key name (`"Enter"`, `"/"`, `"a"`, `"ArrowUp"`)
    pub fn from_name(name: &str) -> Self {
        if name == "Enter" {
            return Key::Enter;
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Character(c),
            _ => Key::Other(name.to_string()),
        }
    }
}

/// Input events the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent<N> {
    /// Primary-button activation on `target`; propagates to its ancestors
    Click { target: N },
    /// Key press; `target` is the focused element, if any
    KeyDown { target: Option<N>, key: Key },
}

/// Which behavior ran while handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    Search,
    ScrollToTop,
    PanelToggle,
    OpenPreview,
    ClosePreview,
    FocusSearch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The host must suppress its default action (e.g. inserting the typed character)
    pub default_prevented: bool,
    /// Behaviors that ran, in order
    pub handled: Vec<Behavior>,
}

impl EventOutcome {
    pub fn is_handled(&self) -> bool {
        !self.handled.is_empty()
    }

    pub fn ran(&self, behavior: Behavior) -> bool {
        self.handled.contains(&behavior)
    }
}
