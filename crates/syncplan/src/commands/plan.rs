use std::sync::Arc;

use anyhow::Context;
use syncplan_core::{Config, LocalFileUtils, PlanReporter, PlanSession, RemoteManifest};
use tracing::debug;

use crate::cli::{OutputFormat, PlanArgs};

pub struct Plan;

impl Plan {
    pub async fn execute(args: &PlanArgs, config: &Config) -> anyhow::Result<()> {
        let manifest_path = args
            .remote
            .as_deref()
            .or_else(|| config.remote_manifest())
            .context("No remote manifest given: pass --remote or set remote_manifest in config")?;

        let manifest = RemoteManifest::load(manifest_path)?;

        debug!(
            manifest = %manifest_path.display(),
            entries = manifest.len(),
            "loaded remote manifest"
        );

        let file_utils = Arc::new(LocalFileUtils::with_buffer_size(config.hash_buffer_size()));
        let session = PlanSession::new(file_utils);
        let result = session.plan(&args.root, &args.files, &manifest).await;

        match args.format {
            OutputFormat::Text => print!("{}", PlanReporter::generate_summary(&result)),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&result).context("Failed to serialize plan")?
            ),
        }

        if !result.is_success() {
            anyhow::bail!("{} file(s) could not be planned", result.errors.len());
        }

        Ok(())
    }
}
