//! Page load: key resolution and the result applied to host state

use super::{PageState, RouteParams, Router};
use crate::content::{ContentError, Document, Lookup, PostLoader};
use crate::helpers::{key_from_route_path, strip_public_segment};

/// Everything a page load decided, before it touches host state
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoadResult {
    NotFound {
        redirect: String,
    },
    Found {
        title: String,
        image: Option<String>,
        document: Document,
    },
}

impl PageLoadResult {
    /// Write the outcome onto the host page and router
    pub fn apply(&self, page: &mut PageState, router: &mut Router) {
        match self {
            PageLoadResult::NotFound { redirect } => {
                router.path = redirect.clone();
                page.title = String::new();
            }
            PageLoadResult::Found { title, image, .. } => {
                page.title = title.clone();
                if let Some(image) = image {
                    page.image = Some(image.clone());
                }
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PageLoadResult::Found { .. })
    }
}

/// Key requested by the route: a non-empty `slug` parameter, else the path
pub fn resolve_key(params: &RouteParams, router: &Router) -> String {
    match params.slug.as_deref() {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => key_from_route_path(&router.path),
    }
}

/// Load the post for `key` and decide what the page shows
pub fn load_page(
    loader: &PostLoader,
    key: &str,
    not_found_path: &str,
) -> Result<PageLoadResult, ContentError> {
    let result = match loader.load(key)? {
        Lookup::NotFound => PageLoadResult::NotFound {
            redirect: not_found_path.to_string(),
        },
        Lookup::Found(document) => PageLoadResult::Found {
            title: document.title.clone(),
            image: document.cover.as_deref().map(strip_public_segment),
            document,
        },
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MarkdownRenderer;
    use std::fs;
    use tempfile::TempDir;

    fn loader_with(name: &str, content: &str) -> (TempDir, PostLoader) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(name), content).unwrap();
        let loader = PostLoader::with_renderer(dir.path(), MarkdownRenderer::new());
        (dir, loader)
    }

    #[test]
    fn test_resolve_key_prefers_slug() {
        let router = Router::new("/from-path");
        assert_eq!(resolve_key(&RouteParams::with_slug("from-slug"), &router), "from-slug");
        assert_eq!(resolve_key(&RouteParams::with_slug(""), &router), "from-path");
        assert_eq!(resolve_key(&RouteParams::default(), &router), "from-path");
    }

    #[test]
    fn test_found_sets_title_and_cover_image() {
        let (_dir, loader) = loader_with(
            "post.md",
            "---\ntitle: Hello\ncover: \"/public/img.png\"\n---\nBody\n",
        );

        let result = load_page(&loader, "post", "/404").unwrap();
        let mut page = PageState::default();
        let mut router = Router::new("/post");
        result.apply(&mut page, &mut router);

        assert!(result.is_found());
        assert_eq!(page.title, "Hello");
        assert_eq!(page.image.as_deref(), Some("/img.png"));
        assert_eq!(router.path, "/post");
    }

    #[test]
    fn test_found_without_cover_keeps_image() {
        let (_dir, loader) = loader_with("post.md", "---\ntitle: Hello\n---\nBody\n");

        let result = load_page(&loader, "post", "/404").unwrap();
        let mut page = PageState {
            title: String::new(),
            image: Some("/default.png".to_string()),
        };
        result.apply(&mut page, &mut Router::new("/post"));

        assert_eq!(page.image.as_deref(), Some("/default.png"));
    }

    #[test]
    fn test_not_found_redirects() {
        let (_dir, loader) = loader_with("other.md", "x");

        let result = load_page(&loader, "missing", "/404").unwrap();
        assert_eq!(
            result,
            PageLoadResult::NotFound {
                redirect: "/404".to_string()
            }
        );

        let mut page = PageState {
            title: "Old".to_string(),
            image: None,
        };
        let mut router = Router::new("/missing");
        result.apply(&mut page, &mut router);
        assert_eq!(router.path, "/404");
        assert_eq!(page.title, "");
        assert!(page.image.is_none());
    }
}
