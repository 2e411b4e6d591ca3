//! Recognized content collections

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// A content collection known to the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    #[serde(rename = "blog")]
    Blog,
    #[serde(rename = "rustzenAdmin")]
    RustzenAdmin,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Blog, Collection::RustzenAdmin];

    /// Collection name as used in queries and routes
    pub fn name(self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::RustzenAdmin => "rustzenAdmin",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| QueryError::InvalidCollection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_collections() {
        assert_eq!("blog".parse::<Collection>().unwrap(), Collection::Blog);
        assert_eq!(
            "rustzenAdmin".parse::<Collection>().unwrap(),
            Collection::RustzenAdmin
        );
    }

    #[test]
    fn test_parse_unknown_collection() {
        let err = "blogZh".parse::<Collection>().unwrap_err();
        assert!(matches!(err, QueryError::InvalidCollection(name) if name == "blogZh"));

        // directory name is not a collection name
        assert!("rustzen-admin".parse::<Collection>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for c in Collection::ALL {
            assert_eq!(c.to_string().parse::<Collection>().unwrap(), c);
        }
    }
}
