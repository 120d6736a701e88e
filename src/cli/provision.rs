//! Provision command - emit env files and prune the unused frontend variant.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::constants::{CONTEXT_FILE, ENV_BACKEND_FILE, ENV_FRONTEND_FILE};
use crate::core::context::GenerationContext;
use crate::core::provision::{apply, Plan};
use crate::core::secrets::OsSecretSource;
use crate::error::{GroundworkError, Result};

/// Provision the project at `dir`.
pub fn execute(dir: &Path, context: Option<&Path>, dry_run: bool) -> Result<()> {
    if !dir.is_dir() {
        return Err(GroundworkError::ProjectDirNotFound(dir.to_path_buf()));
    }

    let context_path = context
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(CONTEXT_FILE));
    let ctx = GenerationContext::load(&context_path)?;

    info!("Using frontend: {}", ctx.frontend());
    info!("Generating env files for {} project", ctx.project_slug());

    let plan = Plan::build(&ctx, &mut OsSecretSource);

    if dry_run {
        output::header("plan (dry run)");
        output::kv("project", ctx.project_slug());
        output::kv("frontend", ctx.frontend());
        output::kv(
            "write",
            format!("{} ({} entries)", ENV_BACKEND_FILE, plan.backend().len()),
        );
        output::kv(
            "write",
            format!("{} ({} entries)", ENV_FRONTEND_FILE, plan.frontend().len()),
        );
        output::kv("remove", plan.dir_to_remove());
        return Ok(());
    }

    let applied = apply(dir, &plan)?;

    output::success(&format!("wrote {}", applied.backend_path.display()));
    output::success(&format!("wrote {}", applied.frontend_path.display()));
    match &applied.removed_dir {
        Some(removed) => output::success(&format!("removed {}", removed.display())),
        None => output::dimmed(&format!(
            "{} not present, nothing to remove",
            plan.dir_to_remove()
        )),
    }

    info!("Provisioned successfully");
    Ok(())
}
