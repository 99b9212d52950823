//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding `<key>.md` posts, relative to the base directory
    pub posts_dir: String,
    /// Route the page is redirected to when a post is missing
    pub not_found_path: String,
    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            posts_dir: "posts".to_string(),
            not_found_path: "/404".to_string(),
            style: StyleConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Class tokens attached to the overridden markdown elements
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub heading_accent: String,
    pub heading_weight: String,
    pub paragraph: String,
    pub bullet_list: String,
    pub list_item: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            heading_accent: "text-rosePine-iris".to_string(),
            heading_weight: "font-bold".to_string(),
            paragraph: "my-8 text-xl".to_string(),
            bullet_list: "list-disc my-0".to_string(),
            list_item: "my-0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.not_found_path, "/404");
        assert_eq!(config.style.paragraph, "my-8 text-xl");
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
posts_dir: content/posts
style:
  heading_accent: text-rosePine-love
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.not_found_path, "/404");
        assert_eq!(config.style.heading_accent, "text-rosePine-love");
        assert_eq!(config.style.list_item, "my-0");
    }
}
