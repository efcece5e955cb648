//! Precedence configuration loaded from TOML.
//!
//! ```toml
//! order = ["BY_KEY", "DISCARD_KEY"]
//! ```
//!
//! Names match case-insensitively. Unrecognized names are ignored, and tags left out are
//! appended in their default order when the configuration is applied.

use crate::error::SortError;
use crate::precedence::{PrecedenceTag, parse_tags};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Precedence tag names, highest priority first.
    pub order: Vec<String>,
}

impl SortConfig {
    /// Parses a configuration from TOML text.
    ///
    /// ```
    /// use kvsort::{PrecedenceTag, SortConfig};
    ///
    /// let config = SortConfig::from_toml_str(r#"order = ["by_key", "SIDEWAYS"]"#).unwrap();
    /// assert_eq!(config.tags(), vec![PrecedenceTag::ByKey]);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, SortError> {
        Ok(toml::from_str(text)?)
    }

    /// The recognized tags, in configured order.
    pub fn tags(&self) -> Vec<PrecedenceTag> {
        parse_tags(&self.order)
    }
}

impl From<&[PrecedenceTag]> for SortConfig {
    fn from(tags: &[PrecedenceTag]) -> Self {
        Self {
            order: tags.iter().map(|tag| tag.as_str().to_string()).collect(),
        }
    }
}
