/// Moderation settings loading from rewear.toml
pub mod moderation;

pub use moderation::{Config, ModerationConfig, load_app_config, load_config};
