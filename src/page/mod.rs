//! Blog post page - resolves the route to a post and renders the page

mod lifecycle;
mod state;
mod view;

pub use lifecycle::{load_page, resolve_key, PageLoadResult};
pub use state::{PageState, RouteParams, Router};
pub use view::{LoadState, PostView};
