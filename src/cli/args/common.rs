//! Common CLI types shared across commands

use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Other(format!("Unknown output format '{}'", other))),
        }
    }
}

/// JSON payload given on the command line: inline, or `@path` to read a file
#[derive(Debug, Clone)]
pub struct DataArg(pub String);

impl DataArg {
    /// Raw JSON text, reading the file for `@path`
    pub fn contents(&self) -> Result<String> {
        match self.0.strip_prefix('@') {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => Ok(self.0.clone()),
        }
    }

    /// Decode into a typed payload; unknown or mistyped fields are errors
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        let contents = self.contents()?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::Other(format!("Invalid --data payload: {}", e)))
    }
}

impl FromStr for DataArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DataArg(s.to_string()))
    }
}
