//! Engine configuration.
//!
//! Scoring weights live in `.savannah.toml`, discovered by walking up from
//! the working directory. Invalid weight groups warn and fall back to
//! defaults; a missing file is not an error.

mod core;
mod loader;

pub use core::SavannahConfig;
pub use loader::{directory_ancestors, load_config, parse_and_validate_config};
