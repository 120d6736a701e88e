use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroundworkError {
    #[error("context file not found: {}", .0.display())]
    ContextNotFound(PathBuf),

    #[error("missing context field: {0}")]
    MissingField(&'static str),

    #[error("project slug cannot be empty")]
    EmptySlug,

    #[error("invalid project slug: {slug} ({reason})")]
    InvalidSlug { slug: String, reason: String },

    #[error("unknown frontend variant: {0} (expected one of: next, nuxt)")]
    UnknownFrontend(String),

    #[error("project directory not found: {}", .0.display())]
    ProjectDirNotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("context parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GroundworkError>;
