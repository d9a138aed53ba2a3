//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, GateConfig, LogFormat, LoggingConfig, MailConfig, ServerConfig, VerifierConfig,
};
