mod args;

use anyhow::Result;
use args::{Cli, Commands};
use booking_search::navigation::read_results_page;
use booking_search::query::{Submission, ValidationErrors};
use booking_search::{web, Config, HttpNavigator, QueryBuilder, RecordingNavigator, SearchForm};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
                config.server.bind_addr()?;
            }
            info!("🏨 Booking Search");
            web::serve(&config).await
        }
        Commands::Encode { search } => {
            let builder = QueryBuilder::new(config.schema());
            let navigator = RecordingNavigator::default();
            match builder.submit(&SearchForm::from(search), Utc::now(), &navigator).await? {
                Submission::Navigated(landing) => {
                    println!("{}", landing.target);
                    Ok(())
                }
                Submission::Rejected(errors) => reject(&errors),
            }
        }
        Commands::Search {
            server,
            json,
            search,
        } => {
            let builder = QueryBuilder::new(config.schema());
            let navigator = HttpNavigator::new(&server)?;
            let landing = match builder.submit(&SearchForm::from(search), Utc::now(), &navigator).await? {
                Submission::Navigated(landing) => landing,
                Submission::Rejected(errors) => return reject(&errors),
            };

            let body = landing.body.unwrap_or_default();
            let display = read_results_page(&body)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&display)?);
            } else {
                println!("Location:  {}", display.location);
                println!("Check-in:  {}", display.check_in);
                println!("Check-out: {}", display.check_out);
                println!("Adults:    {}", display.adults);
                println!("Children:  {}", display.children);
                println!("Rooms:     {}", display.rooms);
            }
            Ok(())
        }
    }
}

fn reject(errors: &ValidationErrors) -> Result<()> {
    for error in errors.iter() {
        eprintln!("  {}", error);
    }
    anyhow::bail!("{}", errors)
}
