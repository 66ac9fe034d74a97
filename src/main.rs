mod cli;
mod launcher;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    logging::init_logging(cli.debug);

    // Try to use default X session.
    launcher::ensure_display();

    let profile_dir = launcher::resolve_profile_dir(cli.profile.as_deref())
        .context("Failed to set up browser profile dir")?;

    let browser = launcher::resolve_browser(cli.browser.as_deref()).await?;

    launcher::launch(&browser, &profile_dir, &cli.path)?;

    Ok(())
}
