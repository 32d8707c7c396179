use crate::core::calc::{round2, round4};
use crate::core::models::breakdown::{
    InvocationBreakdown, InvocationCalculations, InvocationPricingLines,
};
use crate::core::models::request::InvocationUsage;
use crate::core::pricing::PricingTable;

/// Monthly cost of function invocations. The monthly free tier (requests
/// and GB-seconds) is subtracted from usage before any cost accrues; both
/// billable line items are scaled by the region multiplier.
pub fn estimate(table: &PricingTable, usage: &InvocationUsage) -> InvocationBreakdown {
    let pricing = &table.invocation;
    let multiplier = table.region_multiplier(&usage.region);

    let total_requests = usage.requests_millions * 1_000_000.0;
    let gb_seconds = total_requests * (usage.duration_ms / 1000.0) * (usage.memory_mb / 1024.0);

    let billable_requests = (total_requests - pricing.free_tier.requests).max(0.0);
    let billable_gb_seconds = (gb_seconds - pricing.free_tier.gb_seconds).max(0.0);

    let requests_cost = billable_requests * pricing.per_request * multiplier;
    let duration_cost = billable_gb_seconds * pricing.per_gb_second * multiplier;
    let total = requests_cost + duration_cost;

    InvocationBreakdown {
        service: "invocation",
        requests_millions: usage.requests_millions,
        duration_ms: usage.duration_ms,
        memory_mb: usage.memory_mb,
        region: usage.region.clone(),
        calculations: InvocationCalculations {
            total_requests,
            gb_seconds: round2(gb_seconds),
            billable_requests,
            billable_gb_seconds: round2(billable_gb_seconds),
        },
        pricing: InvocationPricingLines {
            region_multiplier: multiplier,
            requests_cost: round4(requests_cost),
            duration_cost: round4(duration_cost),
            total_monthly_cost: round4(total),
        },
        free_tier_applied: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(requests_millions: f64, duration_ms: f64, memory_mb: f64) -> InvocationUsage {
        InvocationUsage {
            requests_millions,
            duration_ms,
            memory_mb,
            region: "us-east-1".to_string(),
        }
    }

    #[test]
    fn two_million_requests_at_100ms_128mb() {
        let table = PricingTable::builtin();
        let breakdown = estimate(&table, &usage(2.0, 100.0, 128.0));

        assert!((breakdown.calculations.total_requests - 2_000_000.0).abs() < 1e-6);
        // 2,000,000 * 0.1s * 0.125 GB = 25,000 GB-seconds
        assert!((breakdown.calculations.gb_seconds - 25_000.0).abs() < 1e-6);
        // 1M free requests leave 1M billable; 25,000 GB-s is inside the
        // 400,000 free allowance.
        assert!((breakdown.calculations.billable_requests - 1_000_000.0).abs() < 1e-6);
        assert!((breakdown.calculations.billable_gb_seconds - 0.0).abs() < 1e-12);
        assert!((breakdown.pricing.requests_cost - 0.2).abs() < 1e-9);
        assert!((breakdown.pricing.duration_cost - 0.0).abs() < 1e-12);
        assert!((breakdown.pricing.total_monthly_cost - 0.2).abs() < 1e-9);
        assert!(breakdown.free_tier_applied);
    }

    #[test]
    fn usage_inside_free_tier_costs_nothing() {
        let table = PricingTable::builtin();
        let breakdown = estimate(&table, &usage(0.5, 100.0, 128.0));
        assert!((breakdown.pricing.total_monthly_cost - 0.0).abs() < 1e-12);
    }

    #[test]
    fn duration_cost_beyond_free_tier() {
        let table = PricingTable::builtin();
        // 10M requests * 1s * 1 GB = 10,000,000 GB-seconds
        let breakdown = estimate(&table, &usage(10.0, 1000.0, 1024.0));
        assert!((breakdown.calculations.billable_gb_seconds - 9_600_000.0).abs() < 1e-3);
        // 9,600,000 * 0.0000166667 = 160.00032
        assert!((breakdown.pricing.duration_cost - 160.0003).abs() < 1e-6);
        // 9M billable requests * 0.0000002 = 1.8
        assert!((breakdown.pricing.requests_cost - 1.8).abs() < 1e-9);
    }

    #[test]
    fn total_is_sum_of_line_items() {
        let table = PricingTable::builtin();
        let breakdown = estimate(&table, &usage(10.0, 1000.0, 1024.0));
        let sum = breakdown.pricing.requests_cost + breakdown.pricing.duration_cost;
        assert!((breakdown.pricing.total_monthly_cost - sum).abs() <= 0.0002);
    }

    #[test]
    fn region_multiplier_scales_billable_cost() {
        let table = PricingTable::builtin();
        let base = estimate(&table, &usage(10.0, 0.0, 128.0));
        let scaled = estimate(
            &table,
            &InvocationUsage {
                region: "eu-west-1".to_string(),
                ..usage(10.0, 0.0, 128.0)
            },
        );
        assert!(scaled.pricing.requests_cost > base.pricing.requests_cost);
    }

    #[test]
    fn zero_usage_reports_zero_intermediates() {
        let table = PricingTable::builtin();
        let breakdown = estimate(&table, &usage(0.0, 0.0, 128.0));
        assert!((breakdown.calculations.total_requests - 0.0).abs() < 1e-12);
        assert!((breakdown.calculations.gb_seconds - 0.0).abs() < 1e-12);
        assert!((breakdown.pricing.total_monthly_cost - 0.0).abs() < 1e-12);
    }
}
