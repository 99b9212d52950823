//! URL helper functions

use percent_encoding::percent_decode_str;

/// Segment dropped from asset paths; static files are served from the site root
pub const PUBLIC_SEGMENT: &str = "/public";

/// Drop the first `/public` path segment from an asset path
///
/// # Examples
/// ```ignore
/// strip_public_segment("/public/img.png") // -> "/img.png"
/// ```
pub fn strip_public_segment(path: &str) -> String {
    let mut search_from = 0;
    while let Some(found) = path[search_from..].find(PUBLIC_SEGMENT) {
        let start = search_from + found;
        let end = start + PUBLIC_SEGMENT.len();
        // only a whole segment, so "/publications" survives
        if end == path.len() || path[end..].starts_with('/') {
            return format!("{}{}", &path[..start], &path[end..]);
        }
        search_from = end;
    }
    path.to_string()
}

/// Post key for a route path: leading `/` dropped, percent-escapes decoded
///
/// # Examples
/// ```ignore
/// key_from_route_path("/hello%20world") // -> "hello world"
/// ```
pub fn key_from_route_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}
