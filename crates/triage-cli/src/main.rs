use clap::{Parser, Subcommand};
use triage_core::{CsvHistoryStore, HistoryStore, Source, Ticket};
use triage_n8n::N8nClient;

mod analyze;
mod render;


#[derive(Debug, Parser)]
#[command(name = "triage-cli")]
#[command(about = "Intelligent support manager: ticket triage via n8n")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Send one ticket through the analysis workflow and show the result
    Analyze {
        /// Channel the message arrived on
        #[arg(long, value_enum)]
        source: Source,
        /// Customer feedback text
        message: String,
    },
    /// Print the persisted processing history
    History,
    /// Print the preset example tickets
    Examples,
}

/// Quick-test presets mirroring the intake form's examples.
const EXAMPLE_TICKETS: &[(Source, &str)] = &[
    (
        Source::GoogleReviews,
        "The product arrived broken and customer service won't answer.",
    ),
    (
        Source::Email,
        "I just wanted to say thank you for the fast shipping!",
    ),
    (
        Source::Twitter,
        "Your website is currently down. Is there an ETA for a fix?",
    ),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze { source, message }) => {
            let config = triage_core::load_config()?;
            let store = CsvHistoryStore::new(config.history_path.clone());
            let client = N8nClient::new(&config.webhook_url, config.request_timeout_secs)?;
            let ticket = Ticket::new(source, message);

            let response = analyze::analyze_ticket(&client, &store, &ticket).await;
            render::print_response(&response);
        }
        Some(Commands::History) => {
            let config = triage_core::load_config()?;
            let store = CsvHistoryStore::new(config.history_path.clone());
            render::print_history(&store.load());
        }
        Some(Commands::Examples) => render::print_examples(EXAMPLE_TICKETS),
        None => println!("run `triage-cli analyze --source <channel> <message>` to triage a ticket"),
    }

    Ok(())
}
