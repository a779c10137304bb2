//! Command line configuration for the schema tools.

use clap::{Parser, ValueEnum};

/// How a derived schema is printed
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Every table with its columns and relations.
    #[default]
    Text,
    /// One line per table with column and relation counts.
    Summary,
    /// Pretty-printed JSON.
    Json,
}

/// Command line arguments for the schema tools
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Name given to the derived schema
    #[arg(short = 'n', long, default_value = "app", value_name = "NAME")]
    pub schema_name: String,

    /// Log filter directive, e.g. `info` or `catalog=trace` (overridden by RUST_LOG)
    #[arg(short = 'l', long, default_value = "info", value_name = "FILTER")]
    pub log_level: String,

    /// Output format of the derived schema
    #[arg(long, value_enum, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,
}

impl Config {
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["schema"]).unwrap();
        assert_eq!(config.schema_name(), "app");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.format(), OutputFormat::Text);
    }

    #[test]
    fn explicit_values() {
        let config = Config::try_parse_from([
            "schema",
            "--schema-name",
            "blog",
            "-l",
            "debug",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.schema_name(), "blog");
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.format(), OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Config::try_parse_from(["schema", "--format", "yaml"]).is_err());
    }
}
