//! Configuration loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment, Provider,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::Path;

/// Prefix for environment overrides; `__` separates section and key.
pub const ENV_PREFIX: &str = "MOLTBOT_";

/// Configuration loader that handles source merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `MOLTBOT_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        Self::load_with(config_path, Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Same as [`load`](Self::load) with a custom override provider in
    /// place of the environment.
    pub fn load_with(
        config_path: Option<&Path>,
        overrides: impl Provider,
    ) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(overrides)
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Load only default configuration
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Print the config sources being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] {}<SECTION>__<KEY>", ENV_PREFIX);
        match config_path {
            Some(path) if path.exists() => println!("  [FOUND] File:    {}", path.display()),
            Some(path) => println!("  [     ] File:    {} (missing)", path.display()),
            None => println!("  [     ] File:    none (use --config <path>)"),
        }
        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_overrides() -> Figment {
        Figment::new()
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.agent.submolt, "general");
        assert_eq!(config.llm.api_key_env, "GROQ_API_KEY");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result =
            ConfigLoader::load_with(Some(Path::new("/nonexistent/moltbot.toml")), no_overrides());
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[llm]
model = "mixtral-8x7b"

[agent]
submolt = "philosophy"
"#
        )
        .unwrap();

        let config = ConfigLoader::load_with(
            Some(file.path()),
            Serialized::default("llm.temperature", 0.5),
        )
        .unwrap();

        assert_eq!(config.llm.model, "mixtral-8x7b");
        assert_eq!(config.agent.submolt, "philosophy");
        assert_eq!(config.llm.temperature, 0.5);
        assert_eq!(config.llm.max_tokens, 500);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[agent]\nname = \"FromFile\"").unwrap();

        let config = ConfigLoader::load_with(
            Some(file.path()),
            Serialized::default("agent.name", "FromEnv"),
        )
        .unwrap();

        assert_eq!(config.agent.name, "FromEnv");
    }

    #[test]
    fn test_malformed_file_is_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[llm]\nmax_tokens = \"lots\"").unwrap();

        let result = ConfigLoader::load_with(Some(file.path()), no_overrides());
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
