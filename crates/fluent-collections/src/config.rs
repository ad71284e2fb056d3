//! Serializer configuration
//!
//! Controls the two places where container serialization has a choice to make:
//! non-finite floats and non-string dictionary keys. The defaults reproduce
//! the plain `to_string()` output of [`List`](crate::List) and [`Dict`](crate::Dict).
//!
//! # Example
//!
//! ```
//! use fluent_collections::{NonFiniteFloats, SerializeConfig};
//!
//! let config = SerializeConfig::from_toml_str(r#"non_finite = "null""#).unwrap();
//! assert_eq!(config.non_finite, NonFiniteFloats::Null);
//! assert!(config.quote_keys);
//! ```

use crate::error::{CollectionError, CollectionResult};
use serde::{Deserialize, Serialize};

/// How NaN and infinities are written
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NonFiniteFloats {
    /// Write `NaN`, `inf` and `-inf` as-is (not valid JSON)
    #[default]
    Literal,
    /// Write `null`
    Null,
}

/// Options for [`serialize_with`](crate::serialize_with)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SerializeConfig {
    /// Treatment of non-finite floating point values
    pub non_finite: NonFiniteFloats,

    /// Quote dictionary keys whose serialized form is not already a string
    pub quote_keys: bool,
}

impl Default for SerializeConfig {
    fn default() -> Self {
        Self {
            non_finite: NonFiniteFloats::Literal,
            quote_keys: true,
        }
    }
}

impl SerializeConfig {
    /// Configuration whose output is always valid JSON for JSON-shaped elements
    pub fn strict_json() -> Self {
        Self {
            non_finite: NonFiniteFloats::Null,
            quote_keys: true,
        }
    }

    /// Parse a configuration from a TOML fragment.
    ///
    /// Missing fields take their default; unknown fields are rejected.
    pub fn from_toml_str(source: &str) -> CollectionResult<Self> {
        toml::from_str(source).map_err(|e| CollectionError::Config {
            message: e.to_string(),
        })
    }

    /// Render the configuration back to TOML
    pub fn to_toml_string(&self) -> CollectionResult<String> {
        toml::to_string(self).map_err(|e| CollectionError::Config {
            message: e.to_string(),
        })
    }
}
