use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::{debug, info};

use super::ClientConfig;

pub fn get_default_config() -> &'static str {
    include_str!("../../config/config.toml")
}

/// Builds a [`ClientConfig`] from the embedded defaults, an optional TOML file
/// and `MAMEY_*` environment variables, in increasing order of precedence.
pub fn load_configuration(path: Option<&Path>) -> Result<ClientConfig> {
    let mut builder = Config::builder().add_source(config::File::from_str(
        get_default_config(),
        config::FileFormat::Toml,
    ));

    if let Some(path) = path {
        let filename = path.to_str().context("Invalid config file path")?;
        builder = builder.add_source(config::File::with_name(filename).required(false));
        debug!(path:% = path.display(); "Reading client configuration");
    }

    let cfg = builder
        .add_source(Environment::with_prefix("MAMEY").prefix_separator("_").separator("__"))
        .build()
        .context("Could not build client config")?;

    let client_config: ClientConfig = cfg.try_deserialize().context("Invalid client configuration")?;
    info!(node_url = client_config.node_url.as_str(); "Client configuration loaded");
    Ok(client_config)
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        write_config_to(&path, "node_url = \"http://10.1.1.1:8545\"\ntimeout_secs = 7").unwrap();

        let config = load_configuration(Some(&path)).unwrap();

        assert_eq!(config.node_url, "http://10.1.1.1:8545");
        assert_eq!(config.timeout_secs, 7);
        assert_eq!(config.identity_url, crate::config::DEFAULT_IDENTITY_URL);
    }

    #[test]
    #[serial]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = load_configuration(Some(&path)).unwrap();

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    #[serial]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        write_config_to(&path, "treasury_url = \"http://file-treasury\"").unwrap();

        // SAFETY: serialised with the other env-reading tests.
        unsafe { std::env::set_var("MAMEY_TREASURY_URL", "http://env-treasury") };
        let config = load_configuration(Some(&path));
        unsafe { std::env::remove_var("MAMEY_TREASURY_URL") };

        assert_eq!(config.unwrap().treasury_url, "http://env-treasury");
    }
}
