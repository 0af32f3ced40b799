//! `faqadm` - CLI for faqadmin
//!
//! This binary opens the interactive admin screen over the FAQ collection,
//! plus a small `config` command group for inspecting the runtime setup.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use clap::Parser;

use faqadmin::cli::{Cli, Command, ConfigCommand};
use faqadmin::ui::AdminScreen;
use faqadmin::{init_logging, Config, FaqStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let mut config = Config::load_from(cli.config.clone())?;
    if let Some(path) = cli.data_file {
        config.storage.data_path = Some(path);
    }

    // Execute the command; no subcommand opens the admin screen
    match cli.command {
        Some(Command::Config(config_cmd)) => handle_config(&config, config_cmd),
        None => run_screen(&config),
    }
}

fn run_screen(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = FaqStore::new(config.data_path());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut screen = AdminScreen::new(stdin.lock(), stdout.lock(), store, config.ui.clone());
    screen.run()?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data file:          {}", config.data_path().display());
                println!();
                println!("[UI]");
                println!("  Default language:   {}", config.ui.default_language);
                println!("  Max field width:    {}", config.ui.max_field_width);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
