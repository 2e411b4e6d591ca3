//! Configuration handling

mod site;

pub use site::*;
