//! Generation context loading and validation.
//!
//! The templating mechanism writes a small JSON file describing the user's
//! choices. Missing or malformed fields fail validation up front; nothing
//! downstream has to handle a half-formed context.

use std::path::Path;

use serde::Deserialize;

use crate::core::frontend::Frontend;
use crate::error::{GroundworkError, Result};

/// Raw wire form of the context, before validation.
#[derive(Debug, Deserialize)]
struct RawContext {
    project_slug: Option<String>,
    frontend: Option<String>,
}

/// Validated, normalized generation context.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    project_slug: String,
    frontend: Frontend,
}

impl GenerationContext {
    /// Build a context from raw field values.
    ///
    /// Both fields are normalized to lower case before validation.
    pub fn new(project_slug: &str, frontend: &str) -> Result<Self> {
        let slug = project_slug.trim().to_lowercase();
        validate_slug(&slug)?;

        Ok(Self {
            project_slug: slug,
            frontend: Frontend::parse(frontend)?,
        })
    }

    /// Parse a context from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawContext = serde_json::from_str(json)?;

        let slug = raw
            .project_slug
            .ok_or(GroundworkError::MissingField("project_slug"))?;
        let frontend = raw
            .frontend
            .ok_or(GroundworkError::MissingField("frontend"))?;

        Self::new(&slug, &frontend)
    }

    /// Load and parse a context file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GroundworkError::ContextNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Normalized project slug. Doubles as the database user and name.
    pub fn project_slug(&self) -> &str {
        &self.project_slug
    }

    /// Selected frontend variant.
    pub fn frontend(&self) -> Frontend {
        self.frontend
    }
}

/// Validate a normalized project slug.
///
/// The slug ends up as a database user/name and in env values, so it is
/// restricted to a conservative identifier shape: starts with a letter,
/// then lowercase letters, digits, underscore, or hyphen.
fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(GroundworkError::EmptySlug);
    }

    if let Some(first) = slug.chars().next() {
        if !first.is_ascii_lowercase() {
            return Err(GroundworkError::InvalidSlug {
                slug: slug.to_string(),
                reason: "must start with a letter".to_string(),
            });
        }
    }

    for (i, ch) in slug.chars().enumerate() {
        let allowed = ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-';
        if !allowed {
            return Err(GroundworkError::InvalidSlug {
                slug: slug.to_string(),
                reason: format!("invalid character '{}' at position {}", ch, i + 1),
            });
        }
    }

    Ok(())
}
