use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::pricing::RegionInfo;

/// Resolved specs echoed back alongside instance costs.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceSpecs {
    pub vcpu: u32,
    pub memory_gb: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComputePricingLines {
    pub hourly_rate: f64,
    pub region_multiplier: f64,
    pub monthly_cost: f64,
}

/// Monthly cost breakdown for compute instances.
#[derive(Debug, Clone, Serialize)]
pub struct ComputeBreakdown {
    pub service: &'static str,
    pub instance_type: String,
    pub instances: i64,
    pub hours: f64,
    pub region: String,
    pub pricing: ComputePricingLines,
    pub specs: InstanceSpecs,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestCounts {
    pub get: f64,
    pub put: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoragePricingLines {
    pub region_multiplier: f64,
    pub storage_cost: f64,
    pub requests_get_cost: f64,
    pub requests_put_cost: f64,
    pub total_monthly_cost: f64,
}

/// Monthly cost breakdown for object storage.
#[derive(Debug, Clone, Serialize)]
pub struct StorageBreakdown {
    pub service: &'static str,
    pub storage_gb: f64,
    pub requests: RequestCounts,
    pub region: String,
    pub pricing: StoragePricingLines,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabasePricingLines {
    pub hourly_rate: f64,
    pub region_multiplier: f64,
    pub compute_cost: f64,
    pub storage_cost: f64,
    pub total_monthly_cost: f64,
}

/// Monthly cost breakdown for a managed database.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseBreakdown {
    pub service: &'static str,
    pub instance_type: String,
    pub instances: i64,
    pub storage_gb: f64,
    pub region: String,
    pub pricing: DatabasePricingLines,
    pub specs: InstanceSpecs,
}

/// Intermediate invocation quantities, surfaced for auditability.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationCalculations {
    pub total_requests: f64,
    pub gb_seconds: f64,
    pub billable_requests: f64,
    pub billable_gb_seconds: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvocationPricingLines {
    pub region_multiplier: f64,
    pub requests_cost: f64,
    pub duration_cost: f64,
    pub total_monthly_cost: f64,
}

/// Monthly cost breakdown for function invocations.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationBreakdown {
    pub service: &'static str,
    pub requests_millions: f64,
    pub duration_ms: f64,
    pub memory_mb: f64,
    pub region: String,
    pub calculations: InvocationCalculations,
    pub pricing: InvocationPricingLines,
    pub free_tier_applied: bool,
}

/// Pricing rows for one service plus the resolved region, as returned by
/// the pricing-data operation and the `pricing` command.
#[derive(Debug, Clone, Serialize)]
pub struct PricingDump {
    pub service: &'static str,
    pub region: String,
    pub region_info: Option<RegionInfo>,
    pub pricing_data: serde_json::Value,
    pub last_updated: DateTime<Utc>,
}
