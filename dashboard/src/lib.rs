//! Restaurant operations dashboard
//!
//! Console front-end over the `shared` currency normalizer and preference
//! store. Mock figures of the four dashboard views are authored in USD and
//! shown in Rupiah.
//!
//! # Module layout
//!
//! ```text
//! dashboard/src/
//! ├── core/    # configuration
//! ├── utils/   # logging
//! ├── views/   # mock figures of the four views
//! └── cli.rs   # command parsing and dispatch
//! ```

pub mod cli;
pub mod core;
pub mod utils;
pub mod views;

pub use cli::{Cli, Command, PrefsCommand};
pub use crate::core::Config;
pub use utils::init_logger;
pub use views::{ReportLine, Section, View, ViewReport};

/// Load `.env` and the configuration, then start logging from it
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(&config);

    tracing::debug!(
        environment = %config.environment,
        exchange_rate = config.exchange_rate,
        preferences = %config.preferences_file.display(),
        "Configuration loaded"
    );
    config
}
