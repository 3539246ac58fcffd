//! Output rendering: GPX track documents and inventory listings

use crate::error::{DjiError, DjiResult};
use serde::{Deserialize, Serialize};

pub mod gpx;
pub mod listing;

pub use gpx::{TrackDocument, TrackPoint};
pub use listing::render_inventory;

/// Output format for inventory listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn parse(format: &str) -> DjiResult<Self> {
        match format.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(DjiError::value(format!(
                "invalid output format: {}. Valid formats: text, json, yaml",
                format
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("yaml").unwrap(), OutputFormat::Yaml);
        assert!(matches!(OutputFormat::parse("xml"), Err(DjiError::Value { .. })));
    }
}
