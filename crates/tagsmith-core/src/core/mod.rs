/// Error type and result alias.
pub mod error;

/// Repository properties and their YAML/environment loading.
pub mod properties;
