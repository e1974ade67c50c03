use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wotd_config::Config;
use wotd_core::WordSource;
use wotd_dictionary::DictionaryApiClient;
use wotd_store::{FileStore, WordStore};
use wotd_types::{Word, format_date};

#[derive(Parser)]
#[command(name = "wotd", about = "Word of the day with a locally persisted history")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a new word of the day
    Word,
    /// Show previously seen words, newest first
    History,
    /// Forget all previously seen words
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::new();
    let store = WordStore::new(FileStore::open(&config.storage.data_dir).await?);

    match cli.command {
        Command::Word => {
            let client = DictionaryApiClient::new(config.api.base_url.clone());
            let mut source = WordSource::new(client, store);
            let word = source.fetch_random_word().await;
            print_word(&word);
        }
        Command::History => {
            let history = store.load().await;
            if history.is_empty() {
                println!("No words seen yet.");
            }
            for word in &history {
                print_word(word);
                println!();
            }
        }
        Command::Clear => {
            store.clear().await;
            tracing::info!("Word history cleared");
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_word(word: &Word) {
    println!("{}  ({})", word.word, format_date(&word.date));
    println!("  {}", word.definition);
    println!("  \"{}\"", word.example);
}
