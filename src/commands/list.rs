//! List posts

use anyhow::Result;

use crate::content::{Lookup, PostLoader};
use crate::helpers::published_label;
use crate::Blog;

/// List every post with its relative publication time
pub fn run(blog: &Blog) -> Result<()> {
    let loader = PostLoader::new(blog);
    let keys = loader.keys();

    println!("Posts ({}):", keys.len());
    for key in keys {
        match loader.load(&key) {
            Ok(Lookup::Found(doc)) => {
                println!(
                    "  {} - {} [{}]",
                    published_label(&doc.published_at),
                    doc.title,
                    doc.name
                );
            }
            Ok(Lookup::NotFound) => {}
            Err(e) => {
                tracing::warn!("Failed to load post {:?}: {}", key, e);
            }
        }
    }

    Ok(())
}
