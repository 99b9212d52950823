//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::loader::validate_key;
use crate::Blog;

/// Write `<posts_dir>/<key>.md` with front-matter for `title`.
///
/// The key is the slugified title unless one is given.
pub fn create_post(blog: &Blog, title: &str, key: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Utc::now();

    let key = match key {
        Some(k) => k.to_string(),
        None => slug::slugify(title),
    };
    validate_key(&key)?;

    fs::create_dir_all(&blog.posts_dir)?;
    let file_path = blog.posts_dir.join(format!("{}.md", key));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\npublished_at: {}\n---\n",
        serde_yaml::to_string(title)?.trim_end(),
        now.format("%Y-%m-%dT%H:%M:%SZ")
    );

    fs::write(&file_path, content)?;
    tracing::debug!("Created post {:?}", file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(blog: &Blog, title: &str, key: Option<&str>) -> Result<()> {
    let file_path = create_post(blog, title, key)?;
    println!("Created: {:?}", file_path);
    Ok(())
}
