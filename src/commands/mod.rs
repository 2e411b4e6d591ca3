//! CLI commands

pub mod feed;
pub mod lang;
pub mod list;
pub mod new;
