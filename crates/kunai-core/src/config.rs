use std::path::Path;

use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_EXTENSIONS;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub files: FileConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    /// Accepted file extensions, without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl FileConfig {
    /// ## Summary
    /// Returns whether the path carries one of the accepted extensions.
    ///
    /// The comparison is case-sensitive: `card.VCF` is rejected by default.
    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional TOML file and `KUNAI_*`
    /// environment variables. Environment variables take precedence.
    ///
    /// When `config_file` is `None`, `kunai.toml` in the working directory is
    /// used if it exists.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the
    /// configuration fails.
    pub fn load_with(config_file: Option<&Path>) -> CoreResult<Self> {
        let file_source = match config_file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("kunai.toml").required(false),
        };

        let settings = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("files.extensions", DEFAULT_EXTENSIONS.to_vec())?
            // TOML file
            .add_source(file_source)
            // Env vars
            .add_source(
                config::Environment::with_prefix("KUNAI")
                    .prefix_separator("_")
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("files.extensions"),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// ## Errors
    /// Returns `InvalidInput` for an empty log level, an empty extension list,
    /// or an extension written with its leading dot.
    pub fn validate(&self) -> CoreResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidInput("logging.level is empty".into()));
        }
        if self.files.extensions.is_empty() {
            return Err(CoreError::InvalidInput("files.extensions is empty".into()));
        }
        if let Some(bad) = self
            .files
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(CoreError::InvalidInput(format!(
                "files.extensions entry {bad:?} must be a bare extension such as \"vcf\""
            )));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables, a `.env` file and an
/// optional config file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(config_file: Option<&Path>) -> CoreResult<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load_with(config_file)
}
