//! Loading `.graphiqlrc` files into a [`WorkbenchConfig`].

mod config;
mod error;
mod loader;

pub use config::WorkbenchConfig;
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILES};
