//! Visual styling for the listing page.

pub mod styles;

pub use styles::GLOBAL_STYLES;
