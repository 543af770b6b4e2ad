//! Layered configuration.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`clickforge.toml` shipped with the crate)
//! 2. `~/.config/clickforge/clickforge.toml`
//! 3. `./clickforge.toml`
//! 4. `CLICKFORGE_<SECTION>__<KEY>` environment variables

use clickforge_error::{ClickforgeError, ClickforgeResult, ConfigError};
use clickforge_models::GeminiSettings;
use clickforge_studio::StudioSettings;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../clickforge.toml");

/// Top-level Clickforge configuration.
///
/// # Example
///
/// ```no_run
/// use clickforge::ClickforgeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClickforgeConfig::load()?;
/// println!("Scripts are written by {}", config.studio.script_model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClickforgeConfig {
    /// Gemini connection settings
    #[serde(default)]
    pub gemini: GeminiSettings,
    /// Model selection and timeouts for studio jobs
    #[serde(default)]
    pub studio: StudioSettings,
}

impl ClickforgeConfig {
    /// Load configuration from every layer, then fill a missing API key from
    /// `GEMINI_API_KEY` or `API_KEY`.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> ClickforgeResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/clickforge/clickforge.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("clickforge").required(false))
            .add_source(
                Environment::with_prefix("CLICKFORGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder)
    }

    /// Load bundled defaults overlaid with one specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ClickforgeResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(Self::defaults().add_source(File::from(path.as_ref())))
    }

    /// Load bundled defaults overlaid with TOML text.
    pub fn from_toml_str(toml: &str) -> ClickforgeResult<Self> {
        Self::finish(Self::defaults().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> ClickforgeResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                ClickforgeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ClickforgeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        Ok(Self {
            gemini: config.gemini.with_env_api_key(),
            studio: config.studio,
        })
    }
}
