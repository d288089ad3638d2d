use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::paths;
use crate::ui;

/// Provider used when neither the CLI nor the config file names one.
pub const DEFAULT_PROVIDER: &str = "gemini";

/// Model used when neither the CLI, the config file, nor the provider names one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default settings in the `[chef]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChefConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model name.
    pub model: Option<String>,
}

/// An OpenAI-compatible text-generation provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL; requests go to `{endpoint}/chat/completions`.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Models offered by this provider. The first one is its default.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// The built-in Gemini provider (OpenAI-compatible API).
    pub fn gemini() -> Self {
        Self {
            endpoint: GEMINI_ENDPOINT.to_string(),
            api_key: None,
            api_key_env: Some(GEMINI_API_KEY_ENV.to_string()),
            models: vec![DEFAULT_MODEL.to_string()],
        }
    }

    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/chef/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub chef: ChefConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl ConfigFile {
    /// Looks up a provider, falling back to the built-in one for [`DEFAULT_PROVIDER`].
    pub fn provider(&self, name: &str) -> Option<ProviderConfig> {
        self.providers.get(name).cloned().or_else(|| {
            (name == DEFAULT_PROVIDER).then(ProviderConfig::gemini)
        })
    }

    /// All providers by name, including the built-in one, sorted by name.
    pub fn all_providers(&self) -> Vec<(String, ProviderConfig)> {
        let mut providers: Vec<(String, ProviderConfig)> = self
            .providers
            .iter()
            .map(|(name, provider)| (name.clone(), provider.clone()))
            .collect();

        if !self.providers.contains_key(DEFAULT_PROVIDER) {
            providers.push((DEFAULT_PROVIDER.to_string(), ProviderConfig::gemini()));
        }

        providers.sort_by(|a, b| a.0.cmp(&b.0));
        providers
    }

    /// Name of the provider used when none is given on the command line.
    pub fn default_provider(&self) -> &str {
        self.chef.provider.as_deref().unwrap_or(DEFAULT_PROVIDER)
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider_name: String,
    pub endpoint: String,
    pub model: String,
    /// `None` when no key is configured; the service will reject the call.
    pub api_key: Option<String>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub provider: Option<String>,
    pub model: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then the `[chef]` section, then built-in defaults.
/// A missing API key is not an error here.
///
/// # Errors
///
/// Returns an error if the selected provider is not configured.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let provider_name = options
        .provider
        .clone()
        .unwrap_or_else(|| config_file.default_provider().to_string());

    let provider_config = config_file.provider(&provider_name).ok_or_else(|| {
        let available: Vec<String> = config_file
            .all_providers()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        anyhow::anyhow!(
            "Provider '{provider_name}' not found\n\n\
             Available providers:\n  \
             - {}\n\n\
             Add providers to ~/.config/chef/config.toml",
            available.join("\n  - ")
        )
    })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.chef.model.as_ref())
        .or(provider_config.models.first())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if let Some(warning) = unlisted_model_warning(&model, &provider_name, &provider_config) {
        ui::print_warning(&warning);
    }

    let api_key = provider_config.get_api_key();
    if api_key.is_none() {
        tracing::debug!(provider = %provider_name, "no API key configured");
    }

    Ok(ResolvedConfig {
        provider_name,
        endpoint: provider_config.endpoint,
        model,
        api_key,
    })
}

/// Describes a model missing from the provider's configured list.
///
/// Providers without a model list accept any model.
fn unlisted_model_warning(
    model: &str,
    provider_name: &str,
    provider: &ProviderConfig,
) -> Option<String> {
    if provider.models.is_empty() || provider.models.iter().any(|m| m == model) {
        return None;
    }

    Some(format!(
        "Model '{model}' is not in the configured models list for '{provider_name}'\n\
         Configured models: {}\n\
         Proceeding anyway...\n",
        provider.models.join(", ")
    ))
}

/// Loads the config file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/chef/config.toml`
    /// or `~/.config/chef/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
                Ok(ConfigFile::default())
            }
            _ => self.load(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    fn ollama() -> ProviderConfig {
        ProviderConfig {
            endpoint: "http://localhost:11434/v1".to_string(),
            api_key: None,
            api_key_env: None,
            models: vec!["gemma3:12b".to_string(), "llama3.2".to_string()],
        }
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(
            manager.config_path(),
            r#"
            [chef]
            provider = "ollama"
            model = "gemma3:12b"

            [providers.ollama]
            endpoint = "http://localhost:11434/v1"
            models = ["gemma3:12b", "llama3.2"]
            "#,
        )
        .unwrap();

        let loaded = manager.load().unwrap();

        assert_eq!(loaded.chef.provider, Some("ollama".to_string()));
        assert_eq!(loaded.chef.model, Some("gemma3:12b".to_string()));
        assert_eq!(loaded.providers["ollama"].models.len(), 2);
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        let config = manager.load_or_default().unwrap();
        assert!(config.providers.is_empty());
        assert!(config.chef.provider.is_none());
    }

    #[test]
    fn test_load_or_default_reports_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[chef\nprovider = ").unwrap();

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: ConfigFile = toml::from_str(
            r#"
            [providers.local]
            endpoint = "http://localhost:8080/v1"
            "#,
        )
        .unwrap();

        assert!(config.chef.model.is_none());
        assert!(config.providers["local"].models.is_empty());
        assert!(config.providers["local"].api_key_env.is_none());
    }

    #[test]
    #[serial]
    fn test_provider_get_api_key_from_env() {
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            std::env::set_var("CHEF_TEST_API_KEY", "test-key-value");
        }

        let provider = ProviderConfig {
            endpoint: "https://api.example.com".to_string(),
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("CHEF_TEST_API_KEY".to_string()),
            models: vec![],
        };

        assert_eq!(provider.get_api_key(), Some("test-key-value".to_string()));

        // SAFETY: see above.
        unsafe {
            std::env::remove_var("CHEF_TEST_API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_provider_get_api_key_fallback() {
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            std::env::remove_var("CHEF_TEST_NONEXISTENT_KEY");
        }

        let provider = ProviderConfig {
            endpoint: "https://api.example.com".to_string(),
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("CHEF_TEST_NONEXISTENT_KEY".to_string()),
            models: vec![],
        };

        assert_eq!(provider.get_api_key(), Some("fallback-key".to_string()));
    }

    #[test]
    fn test_builtin_gemini_provider() {
        let config = ConfigFile::default();

        let gemini = config.provider(DEFAULT_PROVIDER).unwrap();
        assert_eq!(gemini.endpoint, GEMINI_ENDPOINT);
        assert_eq!(gemini.api_key_env.as_deref(), Some("GEMINI_API_KEY"));
        assert!(config.provider("ollama").is_none());
    }

    #[test]
    fn test_all_providers_includes_builtin_once() {
        let mut config = ConfigFile::default();
        config.providers.insert("ollama".to_string(), ollama());

        let names: Vec<String> = config.all_providers().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["gemini", "ollama"]);

        config
            .providers
            .insert(DEFAULT_PROVIDER.to_string(), ollama());
        assert_eq!(config.all_providers().len(), 2);
    }

    #[test]
    #[serial]
    fn test_resolve_config_without_file_uses_gemini() {
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            std::env::remove_var(GEMINI_API_KEY_ENV);
        }

        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.provider_name, "gemini");
        assert_eq!(resolved.endpoint, GEMINI_ENDPOINT);
        assert_eq!(resolved.model, DEFAULT_MODEL);
        // A missing key is left for the service to reject.
        assert!(resolved.api_key.is_none());
    }

    #[test]
    fn test_resolve_config_uses_provider_first_model() {
        let mut config = ConfigFile::default();
        config.providers.insert("ollama".to_string(), ollama());

        let options = ResolveOptions {
            provider: Some("ollama".to_string()),
            model: None,
        };
        let resolved = resolve_config(&options, &config).unwrap();

        assert_eq!(resolved.endpoint, "http://localhost:11434/v1");
        assert_eq!(resolved.model, "gemma3:12b");
    }

    #[test]
    fn test_unlisted_model_warning() {
        let provider = ollama();

        assert!(unlisted_model_warning("llama3.2", "ollama", &provider).is_none());

        let warning = unlisted_model_warning("mistral", "ollama", &provider).unwrap();
        assert!(warning.starts_with("Model 'mistral' is not in the configured models list for 'ollama'"));
        assert!(warning.contains("gemma3:12b, llama3.2"));
        assert!(!warning.contains("Warning:"));
    }

    #[test]
    fn test_unlisted_model_warning_skips_providers_without_models() {
        let mut provider = ollama();
        provider.models.clear();

        assert!(unlisted_model_warning("anything", "ollama", &provider).is_none());
    }

    #[test]
    fn test_resolve_config_provider_not_found() {
        let options = ResolveOptions {
            provider: Some("nonexistent".to_string()),
            model: None,
        };

        let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("not found"));
        assert!(message.contains("gemini"));
    }
}
