//! Content collections, records and stores

mod collection;
mod frontmatter;
pub mod loader;
mod post;
mod store;

pub use collection::*;
pub use frontmatter::*;
pub use loader::FsContentStore;
pub use post::*;
pub use store::*;

#[cfg(test)]
pub(crate) use store::memory;
