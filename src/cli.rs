//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use homework_relay::adapters::{PracticumClient, TelegramNotifier};
use homework_relay::config::{self, Credentials, Settings};
use homework_relay::core::services::{Poller, unix_now};

/// homework-relay - Homework review status notifications
#[derive(Parser, Debug)]
#[command(
    name = "homework-relay",
    version,
    about = "Relay homework review status changes to Telegram",
    long_about = "Poll the homework review API on a fixed interval and send a Telegram\n\
                  message whenever the status of the latest homework changes.\n\n\
                  Requires PRACTICUM_TOKEN, TELEGRAM_TOKEN and TELEGRAM_CHAT_ID in the\n\
                  environment or in a .env file."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file (defaults to ~/.config/homework-relay/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Poll once and exit instead of looping
    #[arg(long)]
    pub once: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    config::load_dotenv();
    let credentials = Credentials::from_env()?;
    let settings = Settings::load(cli.config.as_deref())?;

    let api = PracticumClient::new(&settings.endpoint, &credentials.practicum_token);
    let notifier = TelegramNotifier::new(
        &settings.telegram_api_url,
        &credentials.telegram_token,
        &credentials.telegram_chat_id,
    );

    log::info!(
        "Relaying statuses from {} to chat {}",
        api.endpoint(),
        notifier.chat_id()
    );

    let mut poller = Poller::new(api, notifier, unix_now())
        .with_retry_period(settings.retry_period())
        .with_advance_timestamp(settings.advance_timestamp);

    poller.run(cli.once.then_some(1))?;
    Ok(())
}
