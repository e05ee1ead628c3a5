mod cli;
mod commands;
mod logging;
mod menu;
mod output;

use clap::Parser;
use cli::{Cli, Commands, GenCommands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Gen(gen_cmd) => match gen_cmd {
            GenCommands::Direct(args) => commands::generate::run_direct(args),
            GenCommands::Menu { catalog, report } => commands::generate::run_menu(catalog, report),
        },
        Commands::List { catalog } => commands::list::run(catalog),
    };

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
