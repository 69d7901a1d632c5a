//! CLI command implementations

pub mod info;
pub mod settings;
pub mod validate;
