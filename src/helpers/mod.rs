//! Helper functions for post pages
//!
//! Relative dates, asset path rewriting and HTML escaping used while
//! building the page.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
