use clap::Parser;
use geoquiz::catalog::{Country, CountryCatalog};
use geoquiz::global::client::sparql_client;
use geoquiz::global::config::ENV_CONFIG;
use geoquiz::global::enums::worldview::Worldview;
use geoquiz::quiz::build_capital_round;
use geoquiz::sdk::sparql::SparqlClient;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "geoquiz", version, about = "Country quiz rounds backed by Wikidata")]
struct Args {
    /// BCP-47 locale the worldview is derived from
    #[arg(long)]
    locale: Option<String>,

    /// ISO 3166-1 alpha-2 override for the worldview
    #[arg(long)]
    country: Option<String>,

    /// Restrict the round to countries on this continent
    #[arg(long)]
    continent: Option<String>,

    /// Number of answer choices per round
    #[arg(long, default_value_t = 4)]
    choices: usize,

    /// SPARQL endpoint override
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_file_path = init_logging()?;

    info!("Starting geoquiz");
    info!("Logs are being written to: {}", log_file_path);

    let locale = args
        .locale
        .clone()
        .unwrap_or_else(|| ENV_CONFIG.default_locale.clone());
    let worldview = Worldview::resolve(args.country.as_deref(), &locale);
    info!("Resolved worldview {} for locale {}", worldview, locale);

    let client = match &args.endpoint {
        Some(endpoint) => Arc::new(SparqlClient::new(endpoint.clone())),
        None => sparql_client(),
    };
    info!("Loading country catalog from {}", client.endpoint());

    let catalog = CountryCatalog::new(client);
    let countries = catalog.countries().await?;
    info!("Catalog holds {} countries", countries.len());

    let pool: Vec<Country> = match &args.continent {
        Some(name) => countries
            .iter()
            .filter(|country| country.continent.as_deref() == Some(name.as_str()))
            .cloned()
            .collect(),
        None => countries.as_ref().clone(),
    };

    let round = build_capital_round(&mut rand::rng(), &pool, args.choices)?;

    println!("What is the capital of {}?", round.country.label);
    for (index, choice) in round.choices.iter().enumerate() {
        println!("  {}) {}", index + 1, choice);
    }
    println!();
    println!("Answer: {}", round.answer);

    Ok(())
}

fn init_logging() -> anyhow::Result<String> {
    // Create logs directory if it doesn't exist
    let logs_dir = Path::new("logs");
    if !logs_dir.exists() {
        fs::create_dir(logs_dir)?;
    }

    // Create a file for logging with timestamp
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_file_path = format!("logs/geoquiz_{}.log", timestamp);
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    // Create file layer for logging to file
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false) // No color codes in file
        .with_line_number(true)
        .with_file(true);

    // Create console layer for logging to stdout
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true); // Color codes for console

    // Default to info level, but quiet the HTTP stack
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,hyper=warn,reqwest=warn".to_string()),
    );

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(filter)
        .init();

    Ok(log_file_path)
}
