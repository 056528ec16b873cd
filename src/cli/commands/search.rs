//! Search command implementation.
//!
//! Loads the dataset, runs the selected query mode, and prints the
//! formatted result to stdout.

use tracing::debug;

use super::shared::setup_logging;
use crate::Result;
use crate::cli::args::{QueryMode, SearchArgs};
use crate::config::Config;
use crate::index::ShopIndex;
use crate::loader::load_card_shops;
use crate::report;

/// Run the search command.
pub fn run_search(args: SearchArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    debug!("Search arguments: {:?}", args);

    let config = Config::new().with_data_path(&args.data);
    config.validate()?;

    let shops = load_card_shops(&config.data_path)?;

    let output = match args.mode() {
        QueryMode::Preview => report::format_preview(&shops),
        QueryMode::Station(name) => {
            let index = ShopIndex::build(&shops);
            debug!(
                "Indexed {} stations and {} cards",
                index.station_count(),
                index.card_count()
            );
            report::format_station_result(index.search_by_station(name))
        }
        QueryMode::Card(name) => {
            let index = ShopIndex::build(&shops);
            debug!(
                "Indexed {} stations and {} cards",
                index.station_count(),
                index.card_count()
            );
            report::format_card_result(name, index.search_by_card(name))
        }
    };

    println!("{}", output);
    Ok(())
}
