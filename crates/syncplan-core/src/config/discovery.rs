//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

/// Project config file name
pub const PROJECT_CONFIG: &str = ".syncplan.toml";

/// Project-local (uncommitted) config file name
pub const LOCAL_CONFIG: &str = ".syncplan.local.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Project-local config (.syncplan.local.toml)
    pub local: Option<PathBuf>,
    /// Project config (.syncplan.toml)
    pub project: Option<PathBuf>,
    /// Global XDG config
    pub global: Option<PathBuf>,
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available configuration files
    ///
    /// Project files are searched from the current directory upwards.
    #[must_use]
    pub fn discover(cli_path: Option<&Path>) -> ConfigFiles {
        match std::env::current_dir() {
            Ok(cwd) => Self::discover_from(&cwd, cli_path),
            Err(_) => ConfigFiles {
                cli: cli_path.filter(|p| p.is_file()).map(Path::to_path_buf),
                global: Self::find_global_config(),
                ..ConfigFiles::default()
            },
        }
    }

    /// Discover configuration files starting the project search at `start`
    #[must_use]
    pub fn discover_from(start: &Path, cli_path: Option<&Path>) -> ConfigFiles {
        ConfigFiles {
            cli: cli_path.filter(|p| p.is_file()).map(Path::to_path_buf),
            local: Self::find_file(start, LOCAL_CONFIG),
            project: Self::find_file(start, PROJECT_CONFIG),
            global: Self::find_global_config(),
        }
    }

    /// Find a config file in `start` or its parent directories
    fn find_file(start: &Path, name: &str) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Find global config in XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let global_config = dirs::config_dir()?.join("syncplan").join("config.toml");
        global_config.is_file().then_some(global_config)
    }
}
