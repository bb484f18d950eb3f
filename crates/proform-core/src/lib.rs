pub mod app_config;
pub mod config;
pub mod draft;
pub mod profile;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use draft::load_draft;
pub use profile::{
    AchievementEntry, CompanyProfile, ServiceEntry, SocialLinks, StatementEntry,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read draft file {path}: {source}")]
    DraftIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse draft file {path}: {reason}")]
    DraftParse { path: String, reason: String },
}
