//! Infrastructure implementations for the Walkies client: filesystem paths
//! and the durable TOML session vault.

pub mod paths;
pub mod toml_session_vault;

pub use paths::WalkiesPaths;
pub use toml_session_vault::TomlSessionVault;
