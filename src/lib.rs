pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::console::{ConsoleSink, OutputFormat};
pub use crate::config::toml_config::BotConfig;
pub use crate::core::{
    classifier::Classifier,
    codec::Codec,
    handler::MessageHandler,
    scorer::score,
    selector::smart_decode,
};
pub use crate::utils::error::{BotError, Result};
