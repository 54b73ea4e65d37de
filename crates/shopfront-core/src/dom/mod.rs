//! In-memory document tree.
//!
//! A small stand-in for a browser DOM: elements with tag, id, classes, text
//! and inline style, queried with a minimal selector engine. [`DomHost`] turns
//! it into a [`crate::PageHost`] so the behaviors can run against it, both in
//! tests and under the desktop renderer.

mod document;
mod host;
mod selector;

pub use document::{Document, Element, ElementBuilder, HostEffect, NodeId};
pub use host::DomHost;
pub use selector::Selector;
