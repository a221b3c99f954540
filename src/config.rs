use std::{fs, path::Path};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};

/// Settings for a [`Ledger`](crate::Ledger), usually read from a TOML file.
/// Keys left out of the file keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Prefix printed in front of balances.
    pub currency_symbol: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            currency_symbol: String::from("$"),
        }
    }
}

impl LedgerConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        return Self::from_toml(&file_content);
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str(content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }
}


#[cfg(test)]
mod tests {
    use super::LedgerConfig;

    use std::io::Write;

    #[test]
    fn defaults() {
        let config = LedgerConfig::default();
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = LedgerConfig::from_toml("currency_symbol = \"€\"").unwrap();
        assert_eq!(config.currency_symbol, "€");

        let config = LedgerConfig::from_toml("").unwrap();
        assert_eq!(config, LedgerConfig::default());
    }

    #[test]
    fn malformed_file() {
        let err = LedgerConfig::from_toml("currency_symbol = 3").unwrap_err();
        assert_eq!(err.to_string(), "failed to parse config file");
    }

    #[test]
    fn read_from_disk() {
        let path = std::env::temp_dir()
            .join(format!("groupledger-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "currency_symbol = \"£\"").unwrap();
        drop(file);

        let config = LedgerConfig::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.currency_symbol, "£");
    }

    #[test]
    fn missing_file() {
        let err = LedgerConfig::read("/nonexistent/groupledger.toml").unwrap_err();
        assert_eq!(err.to_string(), "failed to read config file");
    }
}
