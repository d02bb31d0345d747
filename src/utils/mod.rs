mod config;
mod file_helper;

pub use config::{default_config_path, load_config, Config};
pub use file_helper::{build_globset, file_extension, is_hidden, should_ignore};
