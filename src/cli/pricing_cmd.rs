use anyhow::Result;
use chrono::Utc;

use crate::cli::output::{OutputFormat, OutputOptions};
use crate::cli::renderer;
use crate::core::config::AppConfig;
use crate::core::models::breakdown::PricingDump;
use crate::core::pricing::{PricingTable, Service};

/// Show the pricing rows for one service, or the region-multiplier table
/// for the pseudo-service "regions".
pub fn run(
    table: &PricingTable,
    service_id: &str,
    region: Option<String>,
    opts: &OutputOptions,
) -> Result<()> {
    if service_id.eq_ignore_ascii_case("regions") {
        match opts.format {
            OutputFormat::Text => {
                println!("{}", renderer::render_regions(table, opts.use_color))
            }
            OutputFormat::Json => print_json(&table.regions, opts)?,
        }
        return Ok(());
    }

    let service = match Service::from_id(service_id) {
        Some(s) => s,
        None => {
            eprintln!("Unknown service: '{}'", service_id);
            eprintln!("Known services: compute, storage, database, invocation, regions");
            std::process::exit(1);
        }
    };

    let config = AppConfig::load().unwrap_or_default();
    let region = region.unwrap_or_else(|| config.settings.default_region.clone());

    let dump = PricingDump {
        service: service.id(),
        region: region.clone(),
        region_info: table.region(&region).cloned(),
        pricing_data: table.service_pricing(service),
        last_updated: Utc::now(),
    };

    match opts.format {
        OutputFormat::Text => {
            let mut output = renderer::render_service_pricing(service, table, opts.use_color);
            if let Some(info) = &dump.region_info {
                output.push_str(&format!(
                    "\n  region {} ({}, x{:.2})",
                    region, info.name, info.multiplier
                ));
            }
            println!("{}", output);
        }
        OutputFormat::Json => print_json(&dump, opts)?,
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(payload: &T, opts: &OutputOptions) -> Result<()> {
    let json = if opts.pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    println!("{}", json);
    Ok(())
}
