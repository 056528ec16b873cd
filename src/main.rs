use clap::Parser;
use momotetsu_cards::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Momotetsu World Card Shop Search");
    println!("================================");
    println!();
    println!("Look up which cards a station sells, which stations sell a card,");
    println!("or export the whole listing as a self-contained offline HTML page.");
    println!();
    println!("USAGE:");
    println!("    momotetsu-cards <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    search      Query the dataset (--station, --card, or --preview)");
    println!("    export      Generate the offline HTML preview page");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Which cards does 東京 sell?");
    println!("    momotetsu-cards search --station 東京");
    println!();
    println!("    # Which stations sell the ゴールドカード?");
    println!("    momotetsu-cards search --card ゴールドカード");
    println!();
    println!("    # List every station and its cards:");
    println!("    momotetsu-cards search --preview");
    println!();
    println!("    # Regenerate the offline page:");
    println!("    momotetsu-cards export --output docs/index.html");
    println!();
    println!("For detailed help on any command, use:");
    println!("    momotetsu-cards <COMMAND> --help");
}
