use booking_search::SearchForm;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "booking-search")]
#[command(about = "Booking search front end: search form, results page and query tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./booking-search.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web front end
    Serve {
        /// Listen address, overrides server.bind
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Validate a search and print its results URL
    Encode {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Submit a search to a running front end and print the results page
    Search {
        /// Base URL of the front end
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        server: String,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        search: SearchArgs,
    },
}

/// Search fields, taken as text and validated like the web form
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Where to stay
    #[arg(short, long)]
    pub location: String,

    /// Check-in date (YYYY-MM-DD or RFC 3339); defaults to now
    #[arg(long, default_value = "")]
    pub from: String,

    /// Check-out date (YYYY-MM-DD or RFC 3339); defaults to now
    #[arg(long, default_value = "")]
    pub to: String,

    #[arg(long, default_value = "1")]
    pub adults: String,

    #[arg(long, default_value = "0")]
    pub children: String,

    #[arg(long, default_value = "1")]
    pub rooms: String,
}

impl From<SearchArgs> for SearchForm {
    fn from(args: SearchArgs) -> Self {
        SearchForm::new(
            args.location,
            args.from,
            args.to,
            args.adults,
            args.children,
            args.rooms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["booking-search", "encode", "--location", "Paris"]).unwrap();
        let Commands::Encode { search } = cli.command else {
            panic!("expected encode");
        };
        let form = SearchForm::from(search);
        assert_eq!(form, SearchForm { location: "Paris".to_string(), ..SearchForm::default() });
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["booking-search", "serve", "--config", "alt.toml", "-b", "0.0.0.0:80"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Commands::Serve { bind: Some(ref b) } if b == "0.0.0.0:80"));
    }
}
