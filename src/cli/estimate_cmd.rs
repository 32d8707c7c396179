use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{OutputFormat, OutputOptions};
use crate::cli::renderer;
use crate::core::calc;
use crate::core::config::AppConfig;
use crate::core::models::request::{ComputeUsage, DatabaseUsage, InvocationUsage, StorageUsage};
use crate::core::pricing::PricingTable;

/// One estimate request per service; the local counterpart of the
/// protocol's calculate_* tools, sharing the same sanitization and
/// calculators.
#[derive(Debug, Subcommand)]
pub enum EstimateRequest {
    /// Hourly-billed compute instances
    Compute {
        /// Instance class (e.g. t3.micro)
        #[arg(long)]
        instance_type: String,
        /// Number of instances
        #[arg(long, default_value_t = 1)]
        instances: i64,
        /// Hours per month (max 744)
        #[arg(long, default_value_t = 744.0)]
        hours: f64,
        /// Region code (default from config)
        #[arg(long)]
        region: Option<String>,
    },
    /// Object storage on the standard tier
    Storage {
        /// Stored data in GB
        #[arg(long)]
        storage_gb: f64,
        /// GET requests in thousands
        #[arg(long, default_value_t = 0.0)]
        requests_get: f64,
        /// PUT requests in thousands
        #[arg(long, default_value_t = 0.0)]
        requests_put: f64,
        /// Region code (default from config)
        #[arg(long)]
        region: Option<String>,
    },
    /// Managed database, billed for a full month
    Database {
        /// Instance class (e.g. db.t3.micro)
        #[arg(long)]
        instance_type: String,
        /// Number of instances
        #[arg(long, default_value_t = 1)]
        instances: i64,
        /// Database storage in GB
        #[arg(long, default_value_t = 0.0)]
        storage_gb: f64,
        /// Region code (default from config)
        #[arg(long)]
        region: Option<String>,
    },
    /// Function invocations with a monthly free tier
    Invocation {
        /// Requests in millions
        #[arg(long)]
        requests_millions: f64,
        /// Average duration in milliseconds
        #[arg(long, default_value_t = 0.0)]
        duration_ms: f64,
        /// Allocated memory in MB
        #[arg(long, default_value_t = 128.0)]
        memory_mb: f64,
        /// Region code (default from config)
        #[arg(long)]
        region: Option<String>,
    },
}

fn print_payload<T: Serialize>(payload: &T, text: String, opts: &OutputOptions) -> Result<()> {
    match opts.format {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => {
            let json = if opts.pretty {
                serde_json::to_string_pretty(payload)?
            } else {
                serde_json::to_string(payload)?
            };
            println!("{}", json);
        }
    }
    Ok(())
}

pub fn run(table: &PricingTable, request: EstimateRequest, opts: &OutputOptions) -> Result<()> {
    let config = AppConfig::load().unwrap_or_default();
    let resolve_region =
        |region: Option<String>| region.unwrap_or_else(|| config.settings.default_region.clone());

    match request {
        EstimateRequest::Compute {
            instance_type,
            instances,
            hours,
            region,
        } => {
            let usage = ComputeUsage {
                instance_type,
                instances,
                hours,
                region: resolve_region(region),
            }
            .sanitized();
            let breakdown = match calc::compute::estimate(table, &usage) {
                Ok(b) => b,
                Err(err) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                }
            };
            print_payload(&breakdown, renderer::render_compute(&breakdown, opts.use_color), opts)
        }
        EstimateRequest::Storage {
            storage_gb,
            requests_get,
            requests_put,
            region,
        } => {
            let usage = StorageUsage {
                storage_gb,
                requests_get,
                requests_put,
                region: resolve_region(region),
            }
            .sanitized();
            let breakdown = calc::storage::estimate(table, &usage);
            print_payload(&breakdown, renderer::render_storage(&breakdown, opts.use_color), opts)
        }
        EstimateRequest::Database {
            instance_type,
            instances,
            storage_gb,
            region,
        } => {
            let usage = DatabaseUsage {
                instance_type,
                instances,
                storage_gb,
                region: resolve_region(region),
            }
            .sanitized();
            let breakdown = match calc::database::estimate(table, &usage) {
                Ok(b) => b,
                Err(err) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                }
            };
            print_payload(&breakdown, renderer::render_database(&breakdown, opts.use_color), opts)
        }
        EstimateRequest::Invocation {
            requests_millions,
            duration_ms,
            memory_mb,
            region,
        } => {
            let usage = InvocationUsage {
                requests_millions,
                duration_ms,
                memory_mb,
                region: resolve_region(region),
            }
            .sanitized();
            let breakdown = calc::invocation::estimate(table, &usage);
            print_payload(
                &breakdown,
                renderer::render_invocation(&breakdown, opts.use_color),
                opts,
            )
        }
    }
}
