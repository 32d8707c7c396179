use crate::core::calc::round2;
use crate::core::error::PricingError;
use crate::core::models::breakdown::{DatabaseBreakdown, DatabasePricingLines, InstanceSpecs};
use crate::core::models::request::DatabaseUsage;
use crate::core::pricing::{PricingTable, HOURS_PER_MONTH};

/// Monthly cost of a managed database. Instances are billed for the full
/// month (744 hours, no partial-month billing); storage is billed per GB.
/// The region multiplier applies to both line items, consistent with the
/// other calculators.
pub fn estimate(
    table: &PricingTable,
    usage: &DatabaseUsage,
) -> Result<DatabaseBreakdown, PricingError> {
    let pricing = table.database_sku(&usage.instance_type)?;
    let multiplier = table.region_multiplier(&usage.region);

    let compute_cost = usage.instances as f64 * pricing.hourly * HOURS_PER_MONTH * multiplier;
    let storage_cost = usage.storage_gb * table.database.storage_gb_month * multiplier;
    let total = compute_cost + storage_cost;

    Ok(DatabaseBreakdown {
        service: "database",
        instance_type: usage.instance_type.clone(),
        instances: usage.instances,
        storage_gb: usage.storage_gb,
        region: usage.region.clone(),
        pricing: DatabasePricingLines {
            hourly_rate: pricing.hourly,
            region_multiplier: multiplier,
            compute_cost: round2(compute_cost),
            storage_cost: round2(storage_cost),
            total_monthly_cost: round2(total),
        },
        specs: InstanceSpecs {
            vcpu: pricing.vcpu,
            memory_gb: pricing.memory_gb,
        },
    })
}
