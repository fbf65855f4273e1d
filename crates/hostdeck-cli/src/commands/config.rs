use comfy_table::{modifiers, presets, Table};
use hostdeck_config::{Config, HostawayConfig, PathManager, SeedOptions};
use serde_json::json;
use std::path::PathBuf;

use crate::commands::prompts;
use crate::output::{Output, OutputFormat};

pub fn run_show(full: bool, output: &Output) -> color_eyre::Result<()> {
    let paths = PathManager::new()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to resolve config paths: {}", e))?;
    let config_file = paths.config_file();
    if !config_file.exists() {
        output.info(format!(
            "No configuration found at {} (run `hostdeck config init`)",
            config_file.display()
        ));
        return Ok(());
    }

    let config = Config::load_from_file(&config_file).map_err(|e| {
        color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e)
    })?;

    match output.format() {
        OutputFormat::Human => {
            let mut table = Table::new();
            table
                .load_preset(presets::UTF8_FULL)
                .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
                .set_header(vec![
                    super::header_cell("Setting"),
                    super::header_cell("Value"),
                ]);
            table.add_row(vec![
                "config file".to_string(),
                config_file.display().to_string(),
            ]);
            match &config.hostaway {
                Some(hostaway) => {
                    table.add_row(vec![
                        "hostaway.enabled".to_string(),
                        hostaway.enabled.to_string(),
                    ]);
                    table.add_row(vec![
                        "hostaway.account_id".to_string(),
                        hostaway.account_id.clone(),
                    ]);
                    table.add_row(vec![
                        "hostaway.api_key".to_string(),
                        display_key(&hostaway.api_key, full),
                    ]);
                    table.add_row(vec![
                        "hostaway.base_url".to_string(),
                        hostaway.base_url.clone(),
                    ]);
                    table.add_row(vec![
                        "hostaway.timeout_secs".to_string(),
                        hostaway.timeout_secs.to_string(),
                    ]);
                }
                None => {
                    table.add_row(vec!["hostaway".to_string(), "not configured".to_string()]);
                }
            }
            table.add_row(vec![
                "seed.enabled".to_string(),
                config.seed.enabled.to_string(),
            ]);
            table.add_row(vec![
                "seed.file".to_string(),
                config
                    .seed
                    .file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in".to_string()),
            ]);
            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let hostaway = config.hostaway.as_ref().map(|h| {
                json!({
                    "enabled": h.enabled,
                    "account_id": h.account_id,
                    "api_key": display_key(&h.api_key, full),
                    "base_url": h.base_url,
                    "timeout_secs": h.timeout_secs,
                })
            });
            output.print_json(&json!({
                "config_file": config_file.display().to_string(),
                "hostaway": hostaway,
                "seed": {
                    "enabled": config.seed.enabled,
                    "file": config.seed.file,
                },
            }));
        }
    }
    Ok(())
}

pub fn run_init(output: &Output) -> color_eyre::Result<()> {
    let paths = PathManager::new()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to resolve config paths: {}", e))?;
    let config_file = paths.config_file();
    let existing = if config_file.exists() {
        Config::load_from_file(&config_file).map_err(|e| {
            color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e)
        })?
    } else {
        Config::default()
    };

    let hostaway_defaults = existing.hostaway.clone().unwrap_or_else(|| HostawayConfig {
        enabled: false,
        account_id: "61148".to_string(),
        api_key: String::new(),
        base_url: "https://api.hostfully.com/v2".to_string(),
        timeout_secs: 10,
    });

    let hostaway = if prompts::prompt_confirm("Enable the Hostaway source?", hostaway_defaults.enabled)? {
        let account_id =
            prompts::prompt_string("Hostaway account id", Some(&hostaway_defaults.account_id))?;
        let key_prompt = if hostaway_defaults.api_key.is_empty() {
            "Hostaway API key"
        } else {
            "Hostaway API key (empty keeps the current one)"
        };
        let entered = prompts::prompt_password(key_prompt)?;
        let api_key = if entered.is_empty() {
            hostaway_defaults.api_key.clone()
        } else {
            entered
        };
        if api_key.is_empty() {
            return Err(color_eyre::eyre::eyre!("An API key is required"));
        }
        let base_url =
            prompts::prompt_string("Hostaway base URL", Some(&hostaway_defaults.base_url))?;
        Some(HostawayConfig {
            enabled: true,
            account_id,
            api_key,
            base_url,
            timeout_secs: hostaway_defaults.timeout_secs,
        })
    } else {
        existing.hostaway.clone().map(|mut h| {
            h.enabled = false;
            h
        })
    };

    let seed_enabled = prompts::prompt_confirm("Include the seed review set?", existing.seed.enabled)?;
    let seed_file = if seed_enabled {
        let default_file = existing
            .seed
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let answer =
            prompts::prompt_string("Seed file path (empty for built-in)", Some(&default_file))?;
        if answer.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(answer.trim()))
        }
    } else {
        None
    };

    let config = Config {
        hostaway,
        seed: SeedOptions {
            enabled: seed_enabled,
            file: seed_file,
        },
    };
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration validation failed: {}", e))?;
    config.save_to_file(&config_file).map_err(|e| {
        color_eyre::eyre::eyre!("Failed to save config to {}: {}", config_file.display(), e)
    })?;

    output.success(format!("Configuration saved to {}", config_file.display()));
    Ok(())
}

fn display_key(key: &str, full: bool) -> String {
    if full {
        return key.to_string();
    }
    if key.chars().count() <= 4 {
        return "****".to_string();
    }
    let prefix: String = key.chars().take(4).collect();
    format!("{}****", prefix)
}
