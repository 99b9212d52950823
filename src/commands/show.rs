//! Run a page load for a route and print the page

use anyhow::Result;

use crate::page::{PageState, PostView, RouteParams, Router};
use crate::Blog;

/// Markup and host state after loading `route`
pub struct ShowOutput {
    pub page: PageState,
    pub router: Router,
    pub html: String,
}

/// Load the post page for a route path, optionally with an explicit slug
pub async fn render(blog: &Blog, route: &str, slug: Option<&str>) -> Result<ShowOutput> {
    let mut view = PostView::new(blog);
    let mut page = PageState::default();
    let mut router = Router::new(route);
    let params = RouteParams {
        slug: slug.map(str::to_string),
    };

    view.initiate(&mut page, &params, &mut router).await?;

    Ok(ShowOutput {
        page,
        router,
        html: view.render(),
    })
}

/// Print the page for a route
pub async fn run(blog: &Blog, route: &str, slug: Option<&str>) -> Result<()> {
    let output = render(blog, route, slug).await?;

    tracing::info!(
        "title={:?} image={:?} path={:?}",
        output.page.title,
        output.page.image,
        output.router.path
    );
    print!("{}", output.html);

    Ok(())
}
