//! The content store seam

use async_trait::async_trait;

use super::{Collection, RawRecord};
use crate::error::ValidationError;

/// Read-only source of post records
///
/// Implementations own parsing and schema validation: every record they
/// return already satisfies the post schema.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All records of `collection`, in collection order
    async fn fetch_collection(
        &self,
        collection: Collection,
    ) -> Result<Vec<RawRecord>, ValidationError>;
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::collections::HashMap;

    /// Store backed by a fixed set of records
    #[derive(Default)]
    pub struct MemoryStore {
        collections: HashMap<Collection, Vec<RawRecord>>,
        broken: bool,
    }

    impl MemoryStore {
        pub fn with(mut self, collection: Collection, records: Vec<RawRecord>) -> Self {
            self.collections.insert(collection, records);
            self
        }

        /// A store whose every fetch fails
        pub fn unreachable() -> Self {
            Self {
                broken: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl ContentStore for MemoryStore {
        async fn fetch_collection(
            &self,
            collection: Collection,
        ) -> Result<Vec<RawRecord>, ValidationError> {
            if self.broken {
                return Err(ValidationError::unreachable(
                    "memory",
                    std::io::Error::new(std::io::ErrorKind::NotConnected, "store offline"),
                ));
            }
            Ok(self.collections.get(&collection).cloned().unwrap_or_default())
        }
    }
}
