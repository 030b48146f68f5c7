use chrono::Local;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use news_digest::app::AppContext;
use news_digest::cli::{commands, Cli, Commands, SettingsAction};
use news_digest::config::{Config, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_config_path()?,
    };
    let config = Config::load_from(&config_path)?;

    match cli.command {
        Commands::Generate { date, root } => {
            let ctx = AppContext::new(&config, root)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            commands::generate(&ctx, &config, date).await?;
        }
        Commands::SummarizeUrl {
            file,
            line,
            selection,
        } => {
            let ctx = AppContext::new(&config, None)?;
            commands::summarize_url(&ctx, &config, &file, line, selection).await?;
        }
        Commands::Commands { selection } => {
            commands::list_commands(selection.as_deref());
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::show_settings(&config)?,
            SettingsAction::Set { key, value } => {
                let mut settings = Settings::with_file(config, config_path);
                commands::set_setting(&mut settings, &key, &value)?;
            }
        },
    }

    Ok(())
}
