use anyhow::Result;

use crate::cli::output::OutputOptions;
use crate::cli::selector;
use crate::core::config::AppConfig;
use crate::core::pricing::{PricingTable, BASELINE_REGION};

pub fn init(table: &PricingTable, _opts: &OutputOptions) -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        eprintln!("Config file already exists at {}", path.display());
        eprintln!("Remove it first if you want to regenerate.");
        return Ok(());
    }

    let items = selector::build_region_list(table);
    let region = match selector::interactive_select(&items, BASELINE_REGION) {
        Ok(Some(code)) => code,
        Ok(None) => {
            // Non-TTY fallback: use the baseline region
            BASELINE_REGION.to_string()
        }
        Err(_) => {
            eprintln!("Config init cancelled.");
            return Ok(());
        }
    };

    match AppConfig::generate_with_region(&region) {
        Ok(path) => {
            println!("Generated config at {}", path.display());
            println!("  Default region: {}", region);
        }
        Err(e) => {
            eprintln!("Failed to generate config: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}

pub fn check(table: &PricingTable, _opts: &OutputOptions) -> Result<()> {
    let path = AppConfig::config_path();
    if !path.exists() {
        eprintln!("No config file found at {}", path.display());
        eprintln!("Run `ccost config init` to create one.");
        return Ok(());
    }

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let issues = config.validate(table);
    if issues.is_empty() {
        println!("Config is valid: {}", path.display());
        println!("  Default region: {}", config.settings.default_region);
        println!("  Default format: {}", config.settings.default_format);
    } else {
        eprintln!("Config issues found in {}:", path.display());
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
        std::process::exit(1);
    }
    Ok(())
}
