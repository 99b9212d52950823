//! Post loader - resolves keys to files under the posts directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, Document, Lookup, MarkdownRenderer};
use crate::Blog;

/// Loads posts from `<posts_dir>/<key>.md`
#[derive(Debug, Clone)]
pub struct PostLoader {
    posts_dir: PathBuf,
    renderer: MarkdownRenderer,
}

impl PostLoader {
    /// Create a loader for a blog
    pub fn new(blog: &Blog) -> Self {
        Self::with_renderer(
            blog.posts_dir.clone(),
            MarkdownRenderer::from_style(&blog.config.style),
        )
    }

    pub fn with_renderer(posts_dir: impl Into<PathBuf>, renderer: MarkdownRenderer) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            renderer,
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// File backing a key, if the key is acceptable
    pub fn path_for(&self, key: &str) -> Result<PathBuf, ContentError> {
        let key = validate_key(key)?;
        Ok(self.posts_dir.join(format!("{}.md", key)))
    }

    /// Load and render the post stored under `key`.
    ///
    /// A missing file or a rejected key is `Lookup::NotFound`; read and
    /// front-matter failures are errors.
    pub fn load(&self, key: &str) -> Result<Lookup, ContentError> {
        let path = match self.path_for(key) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Rejected post key: {}", e);
                return Ok(Lookup::NotFound);
            }
        };

        if !path.is_file() {
            tracing::debug!("No post at {:?}", path);
            return Ok(Lookup::NotFound);
        }

        let source = fs::read_to_string(&path)?;
        let (fm, html) = self.renderer.render_document(&source)?;
        tracing::debug!("Rendered post {:?} ({} bytes)", path, html.len());

        let metadata = fm.metadata();
        Ok(Lookup::Found(Document {
            name: key.to_string(),
            html,
            title: fm.title.unwrap_or_default(),
            published_at: fm.published_at.unwrap_or_default(),
            cover: fm.cover,
            metadata,
        }))
    }

    /// Keys of every post in the posts directory, sorted
    pub fn keys(&self) -> Vec<String> {
        if !self.posts_dir.exists() {
            return Vec::new();
        }

        let mut keys: Vec<String> = WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_markdown_file(e.path()))
            .filter_map(|e| {
                e.path()
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(str::to_string)
            })
            .filter(|key| validate_key(key).is_ok())
            .collect();

        keys.sort();
        keys
    }
}

/// Reject keys that could leave the posts directory
pub fn validate_key(key: &str) -> Result<&str, ContentError> {
    let invalid = key.is_empty()
        || key.starts_with('.')
        || key.contains("..")
        || key.contains(['/', '\\', '\0']);

    if invalid {
        Err(ContentError::InvalidKey(key.to_string()))
    } else {
        Ok(key)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}
