//! Minimal CSS-style selectors.
//!
//! Supports what a listing page needs and nothing more:
//!
//! - compound selectors built from an optional tag, `#id` and any number of `.class`
//! - descendant (`.shop .box`) and child (`.boxcontent > p`) combinators
//!
//! Matching runs right to left against a [`Document`], the way browsers do it.

use std::fmt;

use super::document::{Document, Element, NodeId};
use crate::error::{ShopfrontError, ShopfrontResult};

/// Relationship between a step and the step to its left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

/// A single compound selector such as `div.box#featured`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(source: &str, token: &str) -> ShopfrontResult<Self> {
        let mut compound = Compound::default();
        let mut chars = token.chars().peekable();

        // Leading tag name
        let mut tag = String::new();
        while let Some(&c) = chars.peek() {
            if c == '.' || c == '#' {
                break;
            }
            if !is_ident_char(c) {
                return Err(ShopfrontError::invalid_selector(
                    source,
                    format!("unexpected character `{}`", c),
                ));
            }
            tag.push(c);
            chars.next();
        }
        if !tag.is_empty() {
            compound.tag = Some(tag.to_ascii_lowercase());
        }

        while let Some(sigil) = chars.next() {
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c == '.' || c == '#' {
                    break;
                }
                if !is_ident_char(c) {
                    return Err(ShopfrontError::invalid_selector(
                        source,
                        format!("unexpected character `{}`", c),
                    ));
                }
                name.push(c);
                chars.next();
            }
            if name.is_empty() {
                return Err(ShopfrontError::invalid_selector(
                    source,
                    format!("empty name after `{}`", sigil),
                ));
            }
            match sigil {
                '.' => compound.classes.push(name),
                '#' => {
                    if compound.id.is_some() {
                        return Err(ShopfrontError::invalid_selector(source, "more than one id"));
                    }
                    compound.id = Some(name);
                }
                _ => unreachable!("loop only stops on `.` or `#`"),
            }
        }

        Ok(compound)
    }

    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if &element.tag != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{}", tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    compound: Compound,
    /// How this step relates to the previous one. Ignored on the first step.
    combinator: Combinator,
}

/// A parsed selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    /// Parse selector text like `.shop .box` or `.boxcontent > p`.
    pub fn parse(source: &str) -> ShopfrontResult<Self> {
        let spaced = source.replace('>', " > ");
        let mut steps: Vec<Step> = Vec::new();
        let mut pending = Combinator::Descendant;
        let mut after_child = false;

        for token in spaced.split_whitespace() {
            if token == ">" {
                if steps.is_empty() {
                    return Err(ShopfrontError::invalid_selector(
                        source,
                        "starts with a combinator",
                    ));
                }
                if after_child {
                    return Err(ShopfrontError::invalid_selector(
                        source,
                        "repeated `>` combinator",
                    ));
                }
                pending = Combinator::Child;
                after_child = true;
                continue;
            }

            steps.push(Step {
                compound: Compound::parse(source, token)?,
                combinator: pending,
            });
            pending = Combinator::Descendant;
            after_child = false;
        }

        if steps.is_empty() {
            return Err(ShopfrontError::invalid_selector(source, "empty selector"));
        }
        if after_child {
            return Err(ShopfrontError::invalid_selector(
                source,
                "dangling combinator",
            ));
        }

        Ok(Self { steps })
    }

    /// `.name`
    pub fn class(name: &str) -> Self {
        Self::single(Compound {
            classes: vec![name.to_string()],
            ..Default::default()
        })
    }

    /// A bare tag name such as `h2`
    pub fn tag(name: &str) -> Self {
        Self::single(Compound {
            tag: Some(name.to_ascii_lowercase()),
            ..Default::default()
        })
    }

    fn single(compound: Compound) -> Self {
        Self {
            steps: vec![Step {
                compound,
                combinator: Combinator::Descendant,
            }],
        }
    }

    /// `self inner`: `inner` anywhere below a match of `self`
    pub fn descendant(self, inner: Selector) -> Self {
        self.join(inner, Combinator::Descendant)
    }

    /// `self > inner`: `inner` directly below a match of `self`
    pub fn child(self, inner: Selector) -> Self {
        self.join(inner, Combinator::Child)
    }

    fn join(mut self, inner: Selector, combinator: Combinator) -> Self {
        let mut steps = inner.steps.into_iter();
        if let Some(mut first) = steps.next() {
            first.combinator = combinator;
            self.steps.push(first);
        }
        self.steps.extend(steps);
        self
    }

    /// Whether `node` in `doc` is matched by this selector.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.matches_step(doc, node, self.steps.len() - 1)
    }

    fn matches_step(&self, doc: &Document, node: NodeId, index: usize) -> bool {
        let step = &self.steps[index];
        let Some(element) = doc.element(node) else {
            return false;
        };
        if !step.compound.matches(element) {
            return false;
        }
        if index == 0 {
            return true;
        }

        match step.combinator {
            Combinator::Child => doc
                .parent(node)
                .is_some_and(|parent| self.matches_step(doc, parent, index - 1)),
            Combinator::Descendant => {
                let mut current = doc.parent(node);
                while let Some(ancestor) = current {
                    if self.matches_step(doc, ancestor, index - 1) {
                        return true;
                    }
                    current = doc.parent(ancestor);
                }
                false
            }
        }
    }
}

impl std::str::FromStr for Selector {
    type Err = ShopfrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                match step.combinator {
                    Combinator::Descendant => write!(f, " ")?,
                    Combinator::Child => write!(f, " > ")?,
                }
            }
            write!(f, "{}", step.compound)?;
        }
        Ok(())
    }
}
