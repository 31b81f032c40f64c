pub mod env;
mod loader;

pub use env::{AppConfig, DeliveryConfig, InferenceConfig, SmtpSecurity};
pub use loader::load_config;
