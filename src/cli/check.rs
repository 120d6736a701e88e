//! Check command - validate a generation context without side effects.

use std::path::Path;

use crate::cli::output;
use crate::core::constants::CONTEXT_FILE;
use crate::core::context::GenerationContext;
use crate::error::Result;

/// Validate the context for the project at `dir` and report what a
/// provisioning run would do.
pub fn execute(dir: &Path, context: Option<&Path>) -> Result<()> {
    let context_path = context
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(CONTEXT_FILE));
    let ctx = GenerationContext::load(&context_path)?;

    output::success("context is valid");
    output::kv("project", ctx.project_slug());
    output::kv("frontend", ctx.frontend());
    output::kv("keeps", ctx.frontend().dir_name());
    output::kv("removes", ctx.frontend().dir_to_remove());

    Ok(())
}
