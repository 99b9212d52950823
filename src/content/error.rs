use thiserror::Error;

/// Errors raised while loading a post
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid post key: {0:?}")]
    InvalidKey(String),

    #[error("Failed to parse front-matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
