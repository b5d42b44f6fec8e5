//! Identifiers for pricing entities
//!
//! Destination ids are the external slugs used by the config store and the
//! funnel URLs (`"cancun"`, `"puerto-vallarta"`, ...); a newtype keeps them
//! from being confused with other strings flowing through the app layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Slug identifying a destination in the pricing configuration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(pub String);

impl DestinationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DestinationId {
    fn from(slug: &str) -> Self {
        DestinationId(slug.to_string())
    }
}

impl From<String> for DestinationId {
    fn from(slug: String) -> Self {
        DestinationId(slug)
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
