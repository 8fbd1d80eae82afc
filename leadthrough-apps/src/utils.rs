use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{Error, RecorderConfig};

const LEAD_THROUGH_CONFIG_ENV_NAME: &str = "LEAD_THROUGH_CONFIG_PATH";

/// Installs the global tracing subscriber used by the binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

/// Get recorder config path from input or env LEAD_THROUGH_CONFIG_PATH.
pub fn get_apps_recorder_config(config: Option<PathBuf>) -> Option<PathBuf> {
    if config.is_some() {
        config
    } else {
        std::env::var(LEAD_THROUGH_CONFIG_ENV_NAME)
            .map(|s| {
                warn!("### ENV VAR {} is used ###", s);
                PathBuf::from(s)
            })
            .ok()
    }
}

/// Resolve the recorder config: a config file when a path is given,
/// built-in defaults otherwise.
pub fn resolve_recorder_config(config_path: Option<&Path>) -> Result<RecorderConfig, Error> {
    match config_path {
        Some(path) => RecorderConfig::try_new(path),
        None => Ok(RecorderConfig::default()),
    }
}

/// Do something needed to start the program.
pub fn init(name: &str) {
    #[cfg(feature = "ros")]
    armci_ros::init(name);
    debug!("init {}", name);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_apps_recorder_config() {
        let path = get_apps_recorder_config(Some(PathBuf::from("a.toml")));
        assert!(path.is_some());
        assert_eq!(path.unwrap(), PathBuf::from("a.toml"));
        //
        std::env::set_var(LEAD_THROUGH_CONFIG_ENV_NAME, "b.toml");
        let path = get_apps_recorder_config(Some(PathBuf::from("a.toml")));
        assert!(path.is_some());
        assert_eq!(path.unwrap(), PathBuf::from("a.toml"));
        std::env::remove_var(LEAD_THROUGH_CONFIG_ENV_NAME);

        let path = get_apps_recorder_config(None);
        assert!(path.is_none());

        std::env::set_var(LEAD_THROUGH_CONFIG_ENV_NAME, "b.toml");
        let path = get_apps_recorder_config(None);
        assert!(path.is_some());
        assert_eq!(path.unwrap(), PathBuf::from("b.toml"));
        std::env::remove_var(LEAD_THROUGH_CONFIG_ENV_NAME);
    }

    #[test]
    fn test_resolve_recorder_config_without_path() {
        let config = resolve_recorder_config(None).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("paths"));
    }

    #[test]
    fn test_resolve_recorder_config_missing_file() {
        assert!(matches!(
            resolve_recorder_config(Some(Path::new("no_such_config.toml"))),
            Err(Error::NoFile(..))
        ));
    }
}
