use colored::{control, Colorize};

use crate::core::formatter::{
    format_multiplier, format_quantity, format_specs, format_usd, format_usd4,
};
use crate::core::models::breakdown::{
    ComputeBreakdown, DatabaseBreakdown, InvocationBreakdown, StorageBreakdown,
};
use crate::core::pricing::{PricingTable, Service};

const LABEL_WIDTH: usize = 10;

fn label(text: &str) -> String {
    // Pad before coloring so ANSI escapes don't break the column width.
    format!("{:<width$}", text, width = LABEL_WIDTH).cyan().to_string()
}

fn region_line(region: &str, multiplier: f64) -> String {
    format!("  {} {} ({})", label("Region"), region, format_multiplier(multiplier))
}

/// Render a compute-instance cost breakdown.
///
/// Layout:
/// ```text
///  Compute (t3.micro)
///   Instances  1
///   Hours      744
///   Region     us-east-1 (x1.00)
///   Rate       $0.0116/hr
///   Specs      2 vCPU, 1 GB
///   Monthly    $8.63
/// ```
pub fn render_compute(breakdown: &ComputeBreakdown, use_color: bool) -> String {
    control::set_override(use_color);

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(" Compute ({})", breakdown.instance_type).bold().to_string());
    lines.push(format!("  {} {}", label("Instances"), breakdown.instances));
    lines.push(format!("  {} {}", label("Hours"), breakdown.hours));
    lines.push(region_line(&breakdown.region, breakdown.pricing.region_multiplier));
    lines.push(format!(
        "  {} ${:.4}/hr",
        label("Rate"),
        breakdown.pricing.hourly_rate
    ));
    lines.push(format!(
        "  {} {}",
        label("Specs"),
        format_specs(breakdown.specs.vcpu, breakdown.specs.memory_gb)
    ));
    lines.push(format!(
        "  {} {}",
        label("Monthly"),
        format_usd(breakdown.pricing.monthly_cost).bold()
    ));
    lines.join("\n")
}

pub fn render_storage(breakdown: &StorageBreakdown, use_color: bool) -> String {
    control::set_override(use_color);

    let mut lines: Vec<String> = Vec::new();
    lines.push(" Storage (standard)".bold().to_string());
    lines.push(format!("  {} {} GB", label("Stored"), breakdown.storage_gb));
    lines.push(format!(
        "  {} {}k GET, {}k PUT",
        label("Requests"),
        breakdown.requests.get,
        breakdown.requests.put
    ));
    lines.push(region_line(&breakdown.region, breakdown.pricing.region_multiplier));
    lines.push(format!(
        "  {} {}",
        label("Storage"),
        format_usd(breakdown.pricing.storage_cost)
    ));
    lines.push(format!(
        "  {} {}",
        label("GET"),
        format_usd(breakdown.pricing.requests_get_cost)
    ));
    lines.push(format!(
        "  {} {}",
        label("PUT"),
        format_usd(breakdown.pricing.requests_put_cost)
    ));
    lines.push(format!(
        "  {} {}",
        label("Monthly"),
        format_usd(breakdown.pricing.total_monthly_cost).bold()
    ));
    lines.join("\n")
}

pub fn render_database(breakdown: &DatabaseBreakdown, use_color: bool) -> String {
    control::set_override(use_color);

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(" Database ({})", breakdown.instance_type).bold().to_string());
    lines.push(format!("  {} {}", label("Instances"), breakdown.instances));
    lines.push(format!("  {} {} GB", label("Stored"), breakdown.storage_gb));
    lines.push(region_line(&breakdown.region, breakdown.pricing.region_multiplier));
    lines.push(format!(
        "  {} ${:.4}/hr",
        label("Rate"),
        breakdown.pricing.hourly_rate
    ));
    lines.push(format!(
        "  {} {}",
        label("Specs"),
        format_specs(breakdown.specs.vcpu, breakdown.specs.memory_gb)
    ));
    lines.push(format!(
        "  {} {}",
        label("Compute"),
        format_usd(breakdown.pricing.compute_cost)
    ));
    lines.push(format!(
        "  {} {}",
        label("Storage"),
        format_usd(breakdown.pricing.storage_cost)
    ));
    lines.push(format!(
        "  {} {}",
        label("Monthly"),
        format_usd(breakdown.pricing.total_monthly_cost).bold()
    ));
    lines.join("\n")
}

pub fn render_invocation(breakdown: &InvocationBreakdown, use_color: bool) -> String {
    control::set_override(use_color);

    let mut lines: Vec<String> = Vec::new();
    lines.push(
        format!(" Invocation ({} requests)", format_quantity(breakdown.calculations.total_requests))
            .bold()
            .to_string(),
    );
    lines.push(format!("  {} {} ms", label("Duration"), breakdown.duration_ms));
    lines.push(format!("  {} {} MB", label("Memory"), breakdown.memory_mb));
    lines.push(region_line(&breakdown.region, breakdown.pricing.region_multiplier));
    lines.push(format!(
        "  {} {} GB-s",
        label("GB-seconds"),
        format_quantity(breakdown.calculations.gb_seconds)
    ));
    lines.push(format!(
        "  {} {} requests, {} GB-s",
        label("Billable"),
        format_quantity(breakdown.calculations.billable_requests),
        format_quantity(breakdown.calculations.billable_gb_seconds)
    ));
    lines.push(format!(
        "  {} {}",
        label("Requests"),
        format_usd4(breakdown.pricing.requests_cost)
    ));
    lines.push(format!(
        "  {} {}",
        label("Duration"),
        format_usd4(breakdown.pricing.duration_cost)
    ));
    lines.push(format!(
        "  {} {}",
        label("Monthly"),
        format_usd4(breakdown.pricing.total_monthly_cost).bold()
    ));
    if breakdown.free_tier_applied {
        lines.push(format!("  {} monthly allowance subtracted", label("Free tier")));
    }
    lines.join("\n")
}

/// Render the pricing rows for one service.
pub fn render_service_pricing(service: Service, table: &PricingTable, use_color: bool) -> String {
    control::set_override(use_color);

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(" {} pricing ({})", service.display_name(), table.version).bold().to_string());

    match service {
        Service::Compute => {
            for (sku, pricing) in &table.compute {
                lines.push(format!(
                    "  {} ${:.4}/hr   {}",
                    label(sku),
                    pricing.hourly,
                    format_specs(pricing.vcpu, pricing.memory_gb)
                ));
            }
        }
        Service::Storage => {
            lines.push(format!(
                "  {} ${:.3}/GB-month",
                label("Storage"),
                table.storage.storage_gb_month
            ));
            lines.push(format!("  {} ${:.4}/1k", label("GET"), table.storage.get_per_1k));
            lines.push(format!("  {} ${:.4}/1k", label("PUT"), table.storage.put_per_1k));
        }
        Service::Database => {
            for (sku, pricing) in &table.database.instances {
                lines.push(format!(
                    "  {} ${:.4}/hr   {}",
                    label(sku),
                    pricing.hourly,
                    format_specs(pricing.vcpu, pricing.memory_gb)
                ));
            }
            lines.push(format!(
                "  {} ${:.3}/GB-month",
                label("Storage"),
                table.database.storage_gb_month
            ));
        }
        Service::Invocation => {
            lines.push(format!(
                "  {} ${:.7}/request",
                label("Requests"),
                table.invocation.per_request
            ));
            lines.push(format!(
                "  {} ${:.10}/GB-second",
                label("Duration"),
                table.invocation.per_gb_second
            ));
            lines.push(format!(
                "  {} {} requests, {} GB-s per month",
                label("Free tier"),
                format_quantity(table.invocation.free_tier.requests),
                format_quantity(table.invocation.free_tier.gb_seconds)
            ));
        }
    }
    lines.join("\n")
}

/// Render the region-multiplier table.
pub fn render_regions(table: &PricingTable, use_color: bool) -> String {
    control::set_override(use_color);

    let mut lines: Vec<String> = Vec::new();
    lines.push(" Regions".bold().to_string());
    for (code, info) in &table.regions {
        lines.push(format!(
            "  {} {:<14} {}",
            label(code),
            info.name,
            format_multiplier(info.multiplier)
        ));
    }
    lines.join("\n")
}
