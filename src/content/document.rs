//! Loaded post model

use indexmap::IndexMap;

/// A post that was found and rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Key the post was requested with
    pub name: String,

    /// Rendered HTML body
    pub html: String,

    /// Post title, empty when the front-matter has none
    pub title: String,

    /// Raw publication timestamp from the front-matter
    pub published_at: String,

    /// Cover image path as written in the front-matter
    pub cover: Option<String>,

    /// Remaining front-matter keys
    pub metadata: IndexMap<String, String>,
}

/// Outcome of looking a post up by key
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    NotFound,
    Found(Document),
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_document(self) -> Option<Document> {
        match self {
            Lookup::Found(doc) => Some(doc),
            Lookup::NotFound => None,
        }
    }
}
