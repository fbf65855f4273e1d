use dialoguer::{Confirm, Input};

pub fn prompt_string(prompt: &str, default: Option<&str>) -> color_eyre::Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    input
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Reads without echoing. An empty answer means "keep the current key".
pub fn prompt_password(prompt: &str) -> color_eyre::Result<String> {
    rpassword::prompt_password(format!("{}: ", prompt))
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read password: {}", e))
}

pub fn prompt_confirm(prompt: &str, default: bool) -> color_eyre::Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read confirmation: {}", e))
}
