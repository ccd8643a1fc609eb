//! crabmail binary entry point

use anyhow::Result;
use clap::Parser;

use crabmail::cli::{Cli, Commands};
use crabmail::config::Config;
use crabmail::tui::onboarding::{OnboardingWizard, WizardAction};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Guard must stay alive for file logging to flush
    let _guard = crabmail::logging::init(cli.debug)?;

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    match cli.command.unwrap_or(Commands::Setup { start_page: None }) {
        Commands::Setup { start_page } => {
            let mut wizard = OnboardingWizard::new(&config);
            if let Some(page) = start_page {
                wizard.controller.move_to_page_named(&page);
            }

            match crabmail::tui::runner::run(wizard).await? {
                WizardAction::Complete => {
                    println!("Account setup complete. Run `crabmail` to open your inbox.");
                }
                _ => {
                    println!("Setup cancelled.");
                }
            }
        }
        Commands::Config => {
            println!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
