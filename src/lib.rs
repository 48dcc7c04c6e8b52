/// codex5e - Static rules reference core for the 2024 5e ruleset
///
/// Core library providing read-only access to bundled spell, item,
/// monster, and class data, plus rendering of the ruleset's recursive
/// "entry" rich-text format into flat display blocks.

pub mod config;
pub mod data;
pub mod logging;
pub mod render;
pub mod search;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
