//! Content module - post loading, front-matter and markdown rendering

mod document;
mod error;
mod frontmatter;
pub mod loader;
pub mod markdown;

pub use document::{Document, Lookup};
pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use loader::PostLoader;
pub use markdown::{MarkdownRenderer, NodeKind, OpenTag, RenderRules};
