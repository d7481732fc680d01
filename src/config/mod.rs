//! Configuration management for todofmt.
//!
//! This module handles loading and saving configuration from `~/.todofmt/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig};
