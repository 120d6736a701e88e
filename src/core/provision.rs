//! The provisioning pipeline.
//!
//! Split into two halves: [`Plan::build`] derives all secret material and
//! both env records in memory, [`apply`] performs the filesystem effects.
//! The effect order is part of the contract: backend file, then frontend
//! file, then directory cleanup, so a partial failure is predictable.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants::{API_URL, DB_HOST, DB_PORT, ENV_BACKEND_FILE, ENV_FRONTEND_FILE};
use crate::core::context::GenerationContext;
use crate::core::frontend::TokenSpec;
use crate::core::record::EnvRecord;
use crate::core::secrets::SecretSource;
use crate::error::Result;

/// The OIDC credential pair shared by both records within one run.
#[derive(Zeroize, ZeroizeOnDrop)]
struct SharedCredential {
    client_id: String,
    client_secret: String,
}

impl SharedCredential {
    fn generate(secrets: &mut dyn SecretSource) -> Self {
        Self {
            client_id: secrets.client_id().to_string(),
            client_secret: secrets.token_hex(32),
        }
    }
}

/// Everything a provisioning run will do, derived up front.
pub struct Plan {
    backend: EnvRecord,
    frontend: EnvRecord,
    dir_to_remove: &'static str,
}

impl Plan {
    /// Derive secret material and build both env records.
    ///
    /// The client id and client secret are generated once and appear
    /// byte-identical in both records.
    pub fn build(ctx: &GenerationContext, secrets: &mut dyn SecretSource) -> Self {
        let shared = SharedCredential::generate(secrets);

        let mut backend = EnvRecord::new();
        backend.push("DEBUG", "true");
        backend.push("SECRET_KEY", secrets.token_urlsafe(32));
        backend.push("DB_USER", ctx.project_slug());
        backend.push("DB_PASSWORD", secrets.token_urlsafe(32));
        backend.push("DB_DATABASE", ctx.project_slug());
        backend.push("DB_HOST", DB_HOST);
        backend.push("DB_PORT", DB_PORT.to_string());
        backend.push("OIDC_CLIENT_ID", shared.client_id.as_str());
        backend.push("OIDC_CLIENT_SECRET", shared.client_secret.as_str());

        let mut frontend = EnvRecord::new();
        frontend.push("API_URL", API_URL);
        for (key, spec) in ctx.frontend().secret_fields() {
            let value = match spec {
                TokenSpec::UrlSafe(n) => secrets.token_urlsafe(*n),
                TokenSpec::Base64Key(n) => secrets.base64_key(*n),
            };
            frontend.push(key, value);
        }
        frontend.push("OIDC_CLIENT_ID", shared.client_id.as_str());
        frontend.push("OIDC_CLIENT_SECRET", shared.client_secret.as_str());

        debug!(
            backend_keys = backend.len(),
            frontend_keys = frontend.len(),
            "plan built"
        );

        Self {
            backend,
            frontend,
            dir_to_remove: ctx.frontend().dir_to_remove(),
        }
    }

    /// Backend record, destined for `.env`.
    pub fn backend(&self) -> &EnvRecord {
        &self.backend
    }

    /// Frontend record, destined for `.env.frontend`.
    pub fn frontend(&self) -> &EnvRecord {
        &self.frontend
    }

    /// Skeleton directory the run will remove if present.
    pub fn dir_to_remove(&self) -> &'static str {
        self.dir_to_remove
    }
}

/// Outcome of a provisioning run.
#[derive(Debug)]
pub struct Applied {
    /// Path of the written backend env file.
    pub backend_path: PathBuf,
    /// Path of the written frontend env file.
    pub frontend_path: PathBuf,
    /// Removed skeleton directory, if it existed.
    pub removed_dir: Option<PathBuf>,
}

/// Execute a plan against a project directory.
///
/// Overwrites existing env files. The non-selected variant directory is
/// only removed if present; a missing directory is not an error.
pub fn apply(root: &Path, plan: &Plan) -> Result<Applied> {
    let backend_path = root.join(ENV_BACKEND_FILE);
    std::fs::write(&backend_path, plan.backend.render())?;
    info!("wrote {}", backend_path.display());

    let frontend_path = root.join(ENV_FRONTEND_FILE);
    std::fs::write(&frontend_path, plan.frontend.render())?;
    info!("wrote {}", frontend_path.display());

    let target = root.join(plan.dir_to_remove);
    let removed_dir = if target.exists() {
        std::fs::remove_dir_all(&target)?;
        info!("removed {}", target.display());
        Some(target)
    } else {
        debug!("{} not present, skipping removal", target.display());
        None
    };

    Ok(Applied {
        backend_path,
        frontend_path,
        removed_dir,
    })
}
