use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, Password};

pub fn prompt_new_password() -> Result<String> {
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .with_confirmation("Confirm Password", "Passwords do not match")
        .interact()
        .context("Failed to read password")?;

    if password.chars().count() < 4 {
        return Err(anyhow::anyhow!("Password must be at least 4 characters"));
    }

    Ok(password)
}

pub fn prompt_password() -> Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()
        .context("Failed to read password")
}

pub fn prompt_content() -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("What's on your mind?")
        .interact_text()
        .context("Failed to read entry content")
}

pub fn prompt_content_with_initial(initial: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Entry content")
        .with_initial_text(initial)
        .interact_text()
        .context("Failed to read entry content")
}
