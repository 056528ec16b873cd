//! Export command implementation.
//!
//! Loads the dataset and writes the self-contained HTML preview page.

use colored::*;
use tracing::debug;

use super::shared::setup_logging;
use crate::Result;
use crate::cli::args::ExportArgs;
use crate::config::Config;
use crate::constants::messages;
use crate::html::export_html;
use crate::loader::load_card_shops;

/// Run the export command.
pub fn run_export(args: ExportArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    debug!("Export arguments: {:?}", args);

    let config = Config::new()
        .with_data_path(&args.data)
        .with_output_path(&args.output);
    config.validate()?;

    let shops = load_card_shops(&config.data_path)?;
    export_html(&shops, &config.output_path)?;

    println!(
        "{}: {}",
        messages::HTML_EXPORTED.green(),
        config.output_path.display()
    );
    Ok(())
}
