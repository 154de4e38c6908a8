use clap::Parser;
use tarot_reader::core::{imagery, interpretation, session, ConfigProvider};
use tarot_reader::utils::{logger, validation::Validate};
use tarot_reader::{
    CliConfig, DeckProvider, DrawRng, HttpDeckSource, ReadingEngine, SessionEvent, SessionState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tarot-reader CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let reading_type = config.reading_type();
    let rng = match config.seed() {
        Some(seed) => DrawRng::seeded(seed),
        None => DrawRng::from_entropy(),
    };

    let source = HttpDeckSource::new(config);
    let mut provider = DeckProvider::new(source);
    let mut engine = ReadingEngine::new(rng);

    let mut state = SessionState::new();
    state = session::transition(state, SessionEvent::ReadingTypeSelected(reading_type));

    println!("Loading...");
    state = session::transition(state, SessionEvent::DeckRequested);
    let deck = match provider.load().await {
        Ok(deck) => {
            let deck = deck.clone();
            state = session::transition(state, SessionEvent::DeckLoaded(deck.clone()));
            deck
        }
        Err(e) => {
            tracing::error!("Deck load failed: {}", e);
            eprintln!("Failed to load tarot cards. Please try again later.");
            std::process::exit(1);
        }
    };

    state = session::transition(state, SessionEvent::DrawStarted);
    if !state.drawing {
        // Deck not ready or a draw already in flight; nothing to do.
        return Ok(());
    }

    let reading = match engine.draw(&deck, state.reading_type) {
        Ok(reading) => reading,
        Err(e) => {
            tracing::error!("Draw failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    state = session::transition(state, SessionEvent::DrawFinished(reading));
    let Some(reading) = state.reading.as_ref() else {
        return Ok(());
    };

    for card in &reading.cards {
        println!();
        println!("{} ({})", card.name, card.value);
        println!("  Image:              {}", imagery::card_image_url(&card.name_short));
        println!("  Meaning (upright):  {}", card.meaning_up);
        println!("  Meaning (reversed): {}", card.meaning_rev);
    }

    println!();
    println!("Interpretation");
    println!("{}", interpretation::for_reading(reading.reading_type));

    Ok(())
}
