use crate::{AppSettings, RawSettings};
use color_eyre::eyre::{Result, WrapErr};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.yaml";

/// Loads settings from `config/settings.yaml`, overridden by `APP__*` environment variables.
pub fn load_app_settings() -> Result<AppSettings> {
    // Load .env first so it can override values from the yaml file.
    dotenv::from_path(".env").ok();
    load_app_settings_from(Path::new(DEFAULT_SETTINGS_PATH))
}

pub fn load_app_settings_from(config_path: &Path) -> Result<AppSettings> {
    let config_path = config_path
        .canonicalize()
        .wrap_err_with(|| format!("Settings file not found: {}", config_path.display()))?;
    debug!("Loading settings from {}", config_path.display());

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("api.allowed_origins")
                .with_list_parse_key("media.allowed_content_types")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    Ok(raw_settings.into())
}
