//! Components rendering a shopfront document

mod document_view;
mod node_view;

pub use document_view::*;
pub use node_view::*;
