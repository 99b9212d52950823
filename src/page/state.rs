//! Host-owned values the post page reads and mutates

/// Presentation metadata of the host page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub title: String,
    /// Social preview image
    pub image: Option<String>,
}

/// Current routing target of the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Router {
    pub path: String,
}

impl Router {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Parameters matched from the route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub slug: Option<String>,
}

impl RouteParams {
    pub fn with_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
        }
    }
}
