use anyhow::Context;
use syncplan_core::Config as SyncConfig;

pub struct Config;

impl Config {
    /// Print the merged configuration with defaults filled in
    pub fn execute(config: &SyncConfig) -> anyhow::Result<()> {
        let effective = SyncConfig {
            hash_buffer_size: Some(config.hash_buffer_size()),
            remote_manifest: config.remote_manifest.clone(),
        };

        let rendered =
            toml::to_string_pretty(&effective).context("Failed to serialize configuration")?;
        print!("{rendered}");
        Ok(())
    }
}
