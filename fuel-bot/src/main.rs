//! fuel-bot binary: `run` serves the Telegram webhook, `calc` evaluates text locally.

use anyhow::Result;
use clap::Parser;
use fuel_bot::{run_bot, Cli, Commands};
use fuel_telegram::TelegramConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            app_url,
            port,
        } => {
            let mut config = TelegramConfig::load(token, app_url)?;
            if let Some(port) = port {
                config.port = port;
            }
            run_bot(config).await
        }
        Commands::Calc { text } => {
            println!("{}", fuel_calc::calc_text(&text.join(" ")));
            Ok(())
        }
    }
}
