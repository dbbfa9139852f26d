pub mod error;
pub mod config;
pub mod model;
pub mod demo;
pub mod task;

#[cfg(test)]
mod demo_tests;

pub use error::{Error, Result};
pub use config::{AppConfig, ConfigError};
pub use model::{find_model_info, load_model_info_list, ModelCardData, ModelInfo, ModelUsage, SelectedModel};
pub use demo::{DemoConfig, DemoStatus};
pub use task::{find_task_card, TaskCard};
