//! Blog post view: load state machine and page markup

use anyhow::Result;
use std::sync::Arc;

use super::{load_page, resolve_key, PageLoadResult, PageState, RouteParams, Router};
use crate::content::{Document, PostLoader};
use crate::helpers::{html_escape, published_label};
use crate::Blog;

/// Where the view is in its load
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    NotInitiated,
    Loading,
    Found(Document),
    NotFound,
}

/// A blog post page bound to one loader
#[derive(Debug, Clone)]
pub struct PostView {
    loader: Arc<PostLoader>,
    not_found_path: String,
    state: LoadState,
}

impl PostView {
    /// Create a view for a blog
    pub fn new(blog: &Blog) -> Self {
        Self::with_loader(PostLoader::new(blog), blog.config.not_found_path.clone())
    }

    pub fn with_loader(loader: PostLoader, not_found_path: impl Into<String>) -> Self {
        Self {
            loader: Arc::new(loader),
            not_found_path: not_found_path.into(),
            state: LoadState::NotInitiated,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Loaded post, if any
    pub fn document(&self) -> Option<&Document> {
        match &self.state {
            LoadState::Found(doc) => Some(doc),
            _ => None,
        }
    }

    /// Run the page load: resolve the key, load the post off the async
    /// runtime, then update host state and move to `Found` or `NotFound`.
    ///
    /// On error the view stays in `Loading`.
    pub async fn initiate(
        &mut self,
        page: &mut PageState,
        params: &RouteParams,
        router: &mut Router,
    ) -> Result<()> {
        self.state = LoadState::Loading;

        let key = resolve_key(params, router);
        tracing::debug!("Loading post {:?} for route {:?}", key, router.path);

        let loader = Arc::clone(&self.loader);
        let not_found_path = self.not_found_path.clone();
        let result =
            tokio::task::spawn_blocking(move || load_page(&loader, &key, &not_found_path))
                .await??;

        result.apply(page, router);
        self.state = match result {
            PageLoadResult::Found { document, .. } => LoadState::Found(document),
            PageLoadResult::NotFound { .. } => {
                tracing::info!("Post not found, redirecting to {}", router.path);
                LoadState::NotFound
            }
        };

        Ok(())
    }

    /// Markup for the current state
    pub fn render(&self) -> String {
        match &self.state {
            LoadState::NotInitiated | LoadState::Loading => placeholder("Loading ....."),
            LoadState::NotFound => placeholder("Not Found"),
            LoadState::Found(doc) if doc.html.trim().is_empty() => placeholder("Not Found"),
            LoadState::Found(doc) => render_article(doc),
        }
    }
}

fn placeholder(message: &str) -> String {
    format!(
        r#"<section class="mx-auto px-4 md:px-0 max-w-[900px]">
  <h1>{}</h1>
</section>
"#,
        message
    )
}

fn render_article(doc: &Document) -> String {
    // no publication line without a timestamp
    let published = if doc.published_at.trim().is_empty() {
        String::new()
    } else {
        format!(
            "\n  <p class=\"text-xl font-semibold text-rosePine-foam\">Published at {}</p>",
            html_escape(&published_label(&doc.published_at))
        )
    };

    format!(
        r#"<header class="mx-auto my-16 px-4 md:px-0 max-w-[900px] flex flex-col gap-y-4 content-between">
  <h1 class="text-5xl font-bold text-rosePine-love">{}</h1>{}
</header>
<article class="mx-auto px-4 md:px-0 max-w-[900px]">{}</article>
"#,
        html_escape(&doc.title),
        published,
        doc.html
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MarkdownRenderer;
    use std::fs;
    use tempfile::TempDir;

    fn view_with(files: &[(&str, &str)]) -> (TempDir, PostView) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let loader = PostLoader::with_renderer(dir.path(), MarkdownRenderer::new());
        (dir, PostView::with_loader(loader, "/404"))
    }

    #[test]
    fn test_renders_loading_before_initiate() {
        let (_dir, view) = view_with(&[]);
        assert_eq!(view.state(), &LoadState::NotInitiated);
        assert!(view.render().contains("<h1>Loading .....</h1>"));
    }

    #[tokio::test]
    async fn test_initiate_found_from_route_path() {
        let (_dir, mut view) = view_with(&[(
            "hello.md",
            "---\ntitle: Tom & Jerry\npublished_at: 2001-01-01\ncover: /public/c.png\n---\n# Intro\n",
        )]);
        let mut page = PageState::default();
        let mut router = Router::new("/hello");

        view.initiate(&mut page, &RouteParams::default(), &mut router)
            .await
            .unwrap();

        assert_eq!(page.title, "Tom & Jerry");
        assert_eq!(page.image.as_deref(), Some("/c.png"));
        assert_eq!(router.path, "/hello");
        assert_eq!(view.document().map(|d| d.name.as_str()), Some("hello"));

        let html = view.render();
        assert!(html.contains("Tom &amp; Jerry</h1>"));
        assert!(html.contains("Published at "));
        assert!(html.contains("years ago</p>"));
        assert!(html.contains(r#"<h1 class="text-5xl text-rosePine-iris font-bold">Intro</h1>"#));
    }

    #[tokio::test]
    async fn test_initiate_with_slug() {
        let (_dir, mut view) = view_with(&[("by-slug.md", "---\ntitle: Slugged\n---\nText\n")]);
        let mut page = PageState::default();
        let mut router = Router::new("/blog/ignored");

        view.initiate(&mut page, &RouteParams::with_slug("by-slug"), &mut router)
            .await
            .unwrap();

        assert_eq!(page.title, "Slugged");
        assert!(matches!(view.state(), LoadState::Found(_)));
    }

    #[tokio::test]
    async fn test_initiate_not_found() {
        let (_dir, mut view) = view_with(&[]);
        let mut page = PageState::default();
        let mut router = Router::new("/nope");

        view.initiate(&mut page, &RouteParams::default(), &mut router)
            .await
            .unwrap();

        assert_eq!(router.path, "/404");
        assert_eq!(page.title, "");
        assert_eq!(view.state(), &LoadState::NotFound);
        assert!(view.render().contains("<h1>Not Found</h1>"));
    }

    #[tokio::test]
    async fn test_initiate_parse_failure_stays_loading() {
        let (_dir, mut view) = view_with(&[("bad.md", "---\ntitle: [x\n---\n")]);
        let mut page = PageState::default();
        let mut router = Router::new("/bad");

        let result = view
            .initiate(&mut page, &RouteParams::default(), &mut router)
            .await;

        assert!(result.is_err());
        assert_eq!(view.state(), &LoadState::Loading);
        assert!(view.render().contains("Loading"));
    }

    #[test]
    fn test_unparseable_date_is_shown_raw() {
        let doc = Document {
            name: "x".to_string(),
            html: "<p>x</p>".to_string(),
            title: "X".to_string(),
            published_at: "a while back".to_string(),
            cover: None,
            metadata: Default::default(),
        };
        assert!(render_article(&doc).contains("Published at a while back"));
    }

    #[test]
    fn test_missing_date_omits_published_line() {
        let doc = Document {
            name: "x".to_string(),
            html: "<p>x</p>".to_string(),
            title: "X".to_string(),
            published_at: String::new(),
            cover: None,
            metadata: Default::default(),
        };
        let html = render_article(&doc);
        assert!(!html.contains("Published at"));
        assert!(html.contains("<h1 class=\"text-5xl font-bold text-rosePine-love\">X</h1>\n</header>"));
    }

    #[tokio::test]
    async fn test_front_matter_only_post_renders_not_found() {
        let (_dir, mut view) = view_with(&[("empty.md", "---\ntitle: Only meta\n---\n")]);
        let mut page = PageState::default();
        let mut router = Router::new("/empty");

        view.initiate(&mut page, &RouteParams::default(), &mut router)
            .await
            .unwrap();

        assert!(matches!(view.state(), LoadState::Found(_)));
        assert_eq!(page.title, "Only meta");
        let html = view.render();
        assert!(html.contains("<h1>Not Found</h1>"));
        assert!(!html.contains("<article"));
    }
}
