use log::{
    Record,
    kv::{Error, Key, Value, VisitSource},
};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::encode::{Color, Encode, Style, Write};
use serde::Deserialize;

const REDACTED: &str = "<REDACTED>";

/// Field names whose values never reach an appender.
const SENSITIVE_NAMES: [&str; 8] = [
    "private_key",
    "mnemonic",
    "seed",
    "secret",
    "password",
    "passphrase",
    "token",
    "authorization",
];

/// Any field ending in one of these is treated as a credential too, so
/// `api_key`, `auth_token` and `db_password` are covered without listing them.
const SENSITIVE_SUFFIXES: [&str; 6] = ["_private_key", "api_key", "_secret", "_token", "_password", "_passphrase"];

#[derive(Debug, Deserialize)]
pub struct StructuredConsoleEncoderConfig {
    pub pattern: Option<String>,
}

/// Renders the message through a [`PatternEncoder`] and then the record's
/// fields as ` key=value`, with credential-like fields masked.
#[derive(Debug)]
pub struct StructuredConsoleEncoder {
    message: PatternEncoder,
}

impl StructuredConsoleEncoder {
    pub fn new(pattern: &str) -> Self {
        Self {
            message: PatternEncoder::new(pattern),
        }
    }
}

impl Encode for StructuredConsoleEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record) -> anyhow::Result<()> {
        self.message.encode(w, record)?;

        let mut fields = FieldCollector::default();
        let kv_error = record.key_values().visit(&mut fields).err();

        let mut key_style = Style::new();
        key_style.text(Color::Cyan);
        for (key, value) in &fields.pairs {
            w.set_style(&key_style)?;
            write!(w, " {key}=")?;
            w.set_style(&Style::default())?;
            w.write_all(value.as_bytes())?;
        }
        if let Some(err) = kv_error {
            write!(w, " [KV Error: {err}]")?;
        }

        w.write_all(b"\n")?;
        Ok(())
    }
}

fn is_sensitive(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    SENSITIVE_NAMES.contains(&key.as_str()) || SENSITIVE_SUFFIXES.iter().any(|suffix| key.ends_with(suffix))
}

/// Buffers a record's fields, already masked, so nothing is written until
/// every pair has been visited.
#[derive(Default)]
struct FieldCollector {
    pairs: Vec<(String, String)>,
}

impl<'kvs> VisitSource<'kvs> for FieldCollector {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), Error> {
        let rendered = if is_sensitive(key.as_str()) {
            REDACTED.to_string()
        } else {
            value.to_string()
        };
        self.pairs.push((key.as_str().to_string(), rendered));
        Ok(())
    }
}

pub struct StructuredConsoleEncoderDeserializer;

impl log4rs::config::Deserialize for StructuredConsoleEncoderDeserializer {
    type Trait = dyn Encode;
    type Config = StructuredConsoleEncoderConfig;

    fn deserialize(
        &self,
        config: StructuredConsoleEncoderConfig,
        _: &log4rs::config::Deserializers,
    ) -> anyhow::Result<Box<dyn Encode>> {
        let pattern = config.pattern.as_deref().unwrap_or("{d} {l} {t} - {m}");
        Ok(Box::new(StructuredConsoleEncoder::new(pattern)))
    }
}

#[cfg(test)]
mod tests {
    use log::Level;
    use log4rs::encode::writer::simple::SimpleWriter;

    use super::*;

    fn render(fields: &[(&str, &str)]) -> String {
        let encoder = StructuredConsoleEncoder::new("{m}");
        let mut out = SimpleWriter(Vec::new());
        encoder
            .encode(
                &mut out,
                &Record::builder()
                    .level(Level::Info)
                    .target("audit")
                    .args(format_args!("submit"))
                    .key_values(&fields)
                    .build(),
            )
            .unwrap();
        String::from_utf8(out.0).unwrap()
    }

    #[test]
    fn credential_keys_are_redacted() {
        for key in [
            "private_key",
            "mnemonic",
            "api_key",
            "secret",
            "password",
            "token",
            "auth_token",
            "access_token",
            "client_secret",
            "db_password",
            "Authorization",
        ] {
            assert!(is_sensitive(key), "{key} should be redacted");
        }
    }

    #[test]
    fn ordinary_keys_are_kept() {
        for key in ["address", "operation", "symbol", "contract", "tx_hash", "status", "token_count"] {
            assert!(!is_sensitive(key), "{key} should be kept");
        }
    }

    #[test]
    fn encoded_line_masks_only_sensitive_values() {
        let line = render(&[("from", "0xabc"), ("password", "hunter2"), ("auth_token", "t0k")]);

        assert_eq!(line, "submit from=0xabc password=<REDACTED> auth_token=<REDACTED>\n");
        assert!(!line.contains("hunter2"));
    }
}
