pub mod api_key;
pub mod config;
pub mod credentials;
pub mod logger;
pub mod tempfiles;
pub(crate) mod ytcomments_toml;

pub use api_key::resolve_api_key;
pub use config::*;
pub use credentials::{Credentials, load_credentials};
pub use logger::{Colors, LogConfig, setup_logging};
pub use tempfiles::{temp_path_for, write_via_temp};
