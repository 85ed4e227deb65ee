//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fuel-bot")]
#[command(about = "Telegram fuel consumption bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register the webhook and serve updates (config from env; flags override).
    Run {
        /// Bot token; overrides BOT_TOKEN.
        #[arg(short, long)]
        token: Option<String>,
        /// Public base URL of this service; overrides APP_URL.
        #[arg(long)]
        app_url: Option<String>,
        /// Listen port; overrides PORT.
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run the calculator on the given text and print the reply (no network).
    Calc {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
}
