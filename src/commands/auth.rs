use clap::ArgMatches;
use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, LinearError, LinearResult};
use crate::formatting::{mask_api_key, SemanticColor, ThemedColorize};
use crate::logging::log_info;

pub async fn handle_auth(context: &mut CliContext, matches: &ArgMatches) -> LinearResult<()> {
    if matches.get_flag("show") {
        show_api_key(context);
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    let api_key = match matches.get_one::<String>("api-key") {
        Some(key) => key.clone(),
        None => Password::with_theme(&theme)
            .with_prompt("Enter your Linear API key")
            .allow_empty_password(true)
            .interact()?,
    };

    save_verified_api_key(context, &api_key).await
}

/// Checks the key against the API and stores it only if the viewer query succeeds.
pub async fn save_verified_api_key(context: &mut CliContext, api_key: &str) -> LinearResult<()> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(LinearError::InvalidInput("API key cannot be empty".to_string()));
    }

    println!("Verifying API key...");
    let client = context.client_for_key(api_key)?;
    let viewer = client
        .get_viewer()
        .await
        .context("API key verification failed")?;

    println!("{}", "✓ API key verified successfully!".with_theme(SemanticColor::Success));
    println!("\nAuthenticated as:");
    println!("  Name:  {}", viewer.name);
    println!("  Email: {}\n", viewer.email);

    context.set_api_key(api_key.to_string())?;
    log_info(&format!("Stored API key for {}", viewer.email));

    println!("{} {}", "✓ API key saved to".with_theme(SemanticColor::Success), context.config_path().display());
    Ok(())
}

fn show_api_key(context: &CliContext) {
    match context.api_key() {
        Ok(key) => println!("API Key: {}", mask_api_key(key)),
        Err(_) => println!("No API key configured"),
    }
}
