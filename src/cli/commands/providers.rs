//! Provider listing command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// If `specific_provider` is provided, shows detailed information for that provider.
/// Otherwise, lists all providers (the built-in one included) with their endpoints and models.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let config = ConfigManager::new()?.load_or_default()?;
    let default_provider = config.default_provider();

    if let Some(provider_name) = specific_provider {
        let provider = config
            .provider(provider_name)
            .ok_or_else(|| anyhow::anyhow!("Provider '{provider_name}' not found"))?;

        let marker = if default_provider == provider_name {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!("Provider: {}{marker}", Style::value(provider_name));
        println!("  endpoint = {}", provider.endpoint);
        if provider.api_key_env.is_some() || provider.api_key.is_some() {
            let has_key = provider.get_api_key().is_some();
            println!(
                "  api_key  = {}",
                if has_key { "(set)" } else { "(not set)" }
            );
        }
        if provider.models.is_empty() {
            println!("  models   = (none configured)");
        } else {
            println!("  models:");
            for model in &provider.models {
                println!("    - {model}");
            }
        }
        return Ok(());
    }

    println!("{}\n", Style::header("Configured providers"));
    for (name, provider) in config.all_providers() {
        let marker = if default_provider == name {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!("  {}{marker}", Style::value(&name));
        println!("    endpoint: {}", Style::secondary(&provider.endpoint));
        if !provider.models.is_empty() {
            println!("    models: {}", provider.models.join(", "));
        }
    }

    Ok(())
}
