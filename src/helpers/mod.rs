//! Helper functions shared by the feed and the CLI

mod date;
mod url;

pub use date::*;
pub use url::*;
