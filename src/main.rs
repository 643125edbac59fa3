//! Liga Offers - cheapest eligible store offer for every card in a list

use clap::Parser;
use liga_offers::{
    read_cardlist, OfferFinder, ReportWriter, SearchConfig, SnapshotSource, StoreDirectory,
};

/// Find the cheapest acceptable store offer for each card and compare it to market prices
#[derive(Parser, Debug)]
#[command(name = "liga_offers")]
#[command(version, about, long_about = None)]
struct Args {
    /// Card list, one card per line
    #[arg(long, default_value = "assets/inputs/cardlist.txt")]
    cards: String,

    /// Known stores CSV (name,url,discount)
    #[arg(long, default_value = "assets/inputs/stores.csv")]
    stores: String,

    /// Captured card pages (JSON)
    #[arg(long, default_value = "assets/inputs/pages.json")]
    pages: String,

    /// Report CSV, appended to across runs
    #[arg(short, long, default_value = "assets/outputs/cards.csv")]
    output: String,

    /// Worst accepted condition: M, NM, SP, MP, HP or D
    #[arg(long, env = "MINIMAL_CARD_QUALITY")]
    min_quality: String,

    /// Comma-separated accepted language codes
    #[arg(long, env = "ACCEPTED_LANGUAGES")]
    languages: String,

    /// Skip cards whose market minimum is above this price
    #[arg(long, env = "MAX_CARD_PRICE")]
    max_price: Option<f64>,
}

fn run(args: &Args) -> liga_offers::Result<()> {
    let config = SearchConfig::new(&args.min_quality, &args.languages, args.max_price)?;
    let directory = StoreDirectory::load(&args.stores)?;
    let cards = read_cardlist(&args.cards)?;
    let mut source = SnapshotSource::load(&args.pages)?;
    let mut writer = ReportWriter::append(&args.output)?;

    log::info!(
        "Searching {} cards (worst condition {}, {} languages)",
        cards.len(),
        config.max_condition,
        config.languages.len()
    );

    let finder = OfferFinder::new(config, directory);
    finder.run(&cards, &mut source, &mut writer)?;

    log::info!("Report written to {}", args.output);
    Ok(())
}

fn main() {
    // Load .env before clap so MINIMAL_CARD_QUALITY / ACCEPTED_LANGUAGES can come from it
    dotenvy::dotenv().ok();

    // Initialize logger. Set RUST_LOG environment variable to control log level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting Liga Offers");

    if let Err(e) = run(&args) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
