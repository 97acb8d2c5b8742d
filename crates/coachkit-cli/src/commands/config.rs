//! Configuration management command.

use clap::Subcommand;

use coachkit_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show all configuration values
    Show,
    /// Get a single value by key
    Get { key: String },
    /// Set a value by key
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            for key in Config::keys() {
                if let Some(value) = config.get(key) {
                    println!("{key} = {value}");
                }
            }
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown config key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}
