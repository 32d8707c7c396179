use crate::core::calc::round2;
use crate::core::models::breakdown::{RequestCounts, StorageBreakdown, StoragePricingLines};
use crate::core::models::request::StorageUsage;
use crate::core::pricing::PricingTable;

/// Monthly cost of object storage on the single "standard" tier: three
/// independent line items (stored GB, GET requests, PUT requests), each
/// scaled by the region multiplier.
pub fn estimate(table: &PricingTable, usage: &StorageUsage) -> StorageBreakdown {
    let pricing = &table.storage;
    let multiplier = table.region_multiplier(&usage.region);

    let storage_cost = usage.storage_gb * pricing.storage_gb_month * multiplier;
    let get_cost = usage.requests_get * pricing.get_per_1k * multiplier;
    let put_cost = usage.requests_put * pricing.put_per_1k * multiplier;
    let total = storage_cost + get_cost + put_cost;

    StorageBreakdown {
        service: "storage",
        storage_gb: usage.storage_gb,
        requests: RequestCounts {
            get: usage.requests_get,
            put: usage.requests_put,
        },
        region: usage.region.clone(),
        pricing: StoragePricingLines {
            region_multiplier: multiplier,
            storage_cost: round2(storage_cost),
            requests_get_cost: round2(get_cost),
            requests_put_cost: round2(put_cost),
            total_monthly_cost: round2(total),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(storage_gb: f64, get: f64, put: f64, region: &str) -> StorageUsage {
        StorageUsage {
            storage_gb,
            requests_get: get,
            requests_put: put,
            region: region.to_string(),
        }
    }

    #[test]
    fn hundred_gb_no_requests() {
        let table = PricingTable::builtin();
        let breakdown = estimate(&table, &usage(100.0, 0.0, 0.0, "us-east-1"));
        // 100 * 0.023 = 2.30
        assert!((breakdown.pricing.storage_cost - 2.30).abs() < 1e-9);
        assert!((breakdown.pricing.total_monthly_cost - 2.30).abs() < 1e-9);
    }

    #[test]
    fn total_is_sum_of_line_items() {
        let table = PricingTable::builtin();
        let breakdown = estimate(&table, &usage(500.0, 120.0, 40.0, "eu-west-1"));
        let sum = breakdown.pricing.storage_cost
            + breakdown.pricing.requests_get_cost
            + breakdown.pricing.requests_put_cost;
        // Line items and total are rounded independently from exact values,
        // so the displayed total may differ from the summed rounded items by
        // at most the accumulated rounding error.
        assert!((breakdown.pricing.total_monthly_cost - sum).abs() <= 0.015);
    }

    #[test]
    fn request_costs_use_per_thousand_prices() {
        let table = PricingTable::builtin();
        let breakdown = estimate(&table, &usage(0.0, 10_000.0, 10_000.0, "us-east-1"));
        // 10,000 thousands of GETs at 0.0004 = 4.00; PUTs at 0.0005 = 5.00
        assert!((breakdown.pricing.requests_get_cost - 4.0).abs() < 1e-9);
        assert!((breakdown.pricing.requests_put_cost - 5.0).abs() < 1e-9);
        assert!((breakdown.pricing.total_monthly_cost - 9.0).abs() < 1e-9);
    }

    #[test]
    fn region_multiplier_applies_to_every_line() {
        let table = PricingTable::builtin();
        let base = estimate(&table, &usage(1000.0, 1000.0, 1000.0, "us-east-1"));
        let scaled = estimate(&table, &usage(1000.0, 1000.0, 1000.0, "us-west-2"));
        assert!(scaled.pricing.storage_cost > base.pricing.storage_cost);
        assert!(scaled.pricing.requests_get_cost > base.pricing.requests_get_cost);
        assert!(scaled.pricing.requests_put_cost > base.pricing.requests_put_cost);
    }

    #[test]
    fn zero_usage_is_free() {
        let table = PricingTable::builtin();
        let breakdown = estimate(&table, &usage(0.0, 0.0, 0.0, "us-east-1"));
        assert!((breakdown.pricing.total_monthly_cost - 0.0).abs() < 1e-12);
    }
}
