pub mod structured_console_encoder;

use std::path::Path;
use std::sync::OnceLock;

use log::{debug, info};
use log4rs::{
    Config,
    config::{Deserializers, RawConfig},
};

use crate::log::structured_console_encoder::StructuredConsoleEncoderDeserializer;

const DEFAULT_LOG4RS: &str = include_str!("../../resources/default_log4rs.yml");

/// Initializes logging from `log4rs.yml` in the working directory, or from
/// the embedded defaults when that file is absent.
pub fn init_logging() -> anyhow::Result<()> {
    let mut deserializers = Deserializers::default();
    deserializers.insert("structured_console", StructuredConsoleEncoderDeserializer);

    let config_path = "log4rs.yml";
    let path = Path::new(config_path);

    if path.exists() {
        log4rs::init_file(path, deserializers)
            .map_err(|e| anyhow::anyhow!("Failed to load external log4rs.yml: {}", e))?;
        info!(
            path = config_path;
            "Logging initialized from external configuration"
        );
        return Ok(());
    }

    let raw_config: RawConfig = serde_yaml::from_str(DEFAULT_LOG4RS)?;

    let (appenders, errors) = raw_config.appenders_lossy(&deserializers);
    if !errors.is_empty() {
        anyhow::bail!("Errors parsing embedded appenders: {:?}", errors);
    }

    let config = Config::builder()
        .appenders(appenders)
        .loggers(raw_config.loggers())
        .build(raw_config.root())?;

    log4rs::init_config(config)?;

    debug!("Logging initialized from embedded defaults (no external log4rs.yml found)");
    Ok(())
}

fn reveal_pii() -> bool {
    static REVEAL_PII_CACHE: OnceLock<bool> = OnceLock::new();

    *REVEAL_PII_CACHE.get_or_init(|| {
        std::env::var("REVEAL_PII")
            .map(|v| {
                let val = v.to_lowercase();
                val == "true" || val == "1"
            })
            .unwrap_or(false)
    })
}

/// Masks an address showing only its first and last six characters.
/// If REVEAL_PII is true, returns the original string.
pub fn mask_string(s: &str) -> String {
    if reveal_pii() {
        return s.to_string();
    }

    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 12 {
        return "***".to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_logging_only_writes_to_the_console() {
        let yaml: serde_yaml::Value = serde_yaml::from_str(DEFAULT_LOG4RS).unwrap();
        let appenders = yaml["appenders"].as_mapping().unwrap();

        assert!(!appenders.is_empty());
        for (name, appender) in appenders {
            assert_eq!(appender["kind"].as_str(), Some("console"), "appender {name:?}");
        }
        assert_eq!(yaml["loggers"]["audit"]["appenders"][0].as_str(), Some("stderr"));
    }

    #[test]
    fn embedded_logging_config_is_valid() {
        let mut deserializers = Deserializers::default();
        deserializers.insert("structured_console", StructuredConsoleEncoderDeserializer);
        let raw_config: RawConfig = serde_yaml::from_str(DEFAULT_LOG4RS).unwrap();

        let (appenders, errors) = raw_config.appenders_lossy(&deserializers);
        assert!(errors.is_empty(), "{errors:?}");
        assert!(
            Config::builder()
                .appenders(appenders)
                .loggers(raw_config.loggers())
                .build(raw_config.root())
                .is_ok()
        );
    }

    #[test]
    fn masks_long_addresses() {
        if reveal_pii() {
            return;
        }
        assert_eq!(
            mask_string("0x1000000000000000000000000000000000000001"),
            "0x1000...000001"
        );
        assert_eq!(mask_string("0xshort"), "***");
    }

    #[test]
    fn masking_is_char_safe() {
        if reveal_pii() {
            return;
        }
        assert_eq!(mask_string("ñññññññññññññ"), "ññññññ...ññññññ");
    }
}
