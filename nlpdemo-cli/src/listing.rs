// Demo listing and config resolution for the CLI

use nlpdemo_core::{AppConfig, DemoConfig, DemoStatus};

/// Resolve configuration: defaults, then the config file if given, then
/// environment overrides for anything the file left at its default.
pub fn load_config(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(path) = path {
        config.merge(AppConfig::from_file(path)?);
    }

    let env = AppConfig::from_env();
    let defaults = AppConfig::default();
    if env.log_level != defaults.log_level {
        config.log_level = env.log_level;
    }
    if env.max_payload_bytes != defaults.max_payload_bytes {
        config.max_payload_bytes = env.max_payload_bytes;
    }

    config.validate()?;
    Ok(config)
}

/// Demos in listing order: by `order`, then title. Only active demos
/// unless `include_all`.
pub fn list_demos(demos: &[DemoConfig], include_all: bool) -> Vec<&DemoConfig> {
    let mut listed: Vec<&DemoConfig> = demos
        .iter()
        .filter(|d| include_all || d.status == DemoStatus::Active)
        .collect();
    listed.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));
    listed
}
