use crate::core::calc::round2;
use crate::core::error::PricingError;
use crate::core::models::breakdown::{ComputeBreakdown, ComputePricingLines, InstanceSpecs};
use crate::core::models::request::ComputeUsage;
use crate::core::pricing::PricingTable;

/// Monthly cost of hourly-billed compute instances:
/// `instances * hourly_rate * hours * region_multiplier`.
pub fn estimate(
    table: &PricingTable,
    usage: &ComputeUsage,
) -> Result<ComputeBreakdown, PricingError> {
    let pricing = table.compute_sku(&usage.instance_type)?;
    let multiplier = table.region_multiplier(&usage.region);

    let monthly_cost = usage.instances as f64 * pricing.hourly * usage.hours * multiplier;

    Ok(ComputeBreakdown {
        service: "compute",
        instance_type: usage.instance_type.clone(),
        instances: usage.instances,
        hours: usage.hours,
        region: usage.region.clone(),
        pricing: ComputePricingLines {
            hourly_rate: pricing.hourly,
            region_multiplier: multiplier,
            monthly_cost: round2(monthly_cost),
        },
        specs: InstanceSpecs {
            vcpu: pricing.vcpu,
            memory_gb: pricing.memory_gb,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(instance_type: &str, instances: i64, hours: f64, region: &str) -> ComputeUsage {
        ComputeUsage {
            instance_type: instance_type.to_string(),
            instances,
            hours,
            region: region.to_string(),
        }
    }

    #[test]
    fn one_micro_instance_full_month_baseline() {
        let table = PricingTable::builtin();
        let breakdown = estimate(&table, &usage("t3.micro", 1, 744.0, "us-east-1")).unwrap();
        // 1 * 0.0116 * 744 * 1.0 = 8.6304
        assert!((breakdown.pricing.monthly_cost - 8.63).abs() < 1e-9);
        assert!((breakdown.pricing.hourly_rate - 0.0116).abs() < 1e-12);
        assert_eq!(breakdown.specs.vcpu, 2);
    }

    #[test]
    fn region_multiplier_scales_cost() {
        let table = PricingTable::builtin();
        let baseline = estimate(&table, &usage("t3.large", 2, 100.0, "us-east-1")).unwrap();
        let scaled = estimate(&table, &usage("t3.large", 2, 100.0, "ap-southeast-1")).unwrap();
        assert!(scaled.pricing.monthly_cost > baseline.pricing.monthly_cost);
        assert!((scaled.pricing.region_multiplier - 1.15).abs() < 1e-12);
    }

    #[test]
    fn unknown_region_uses_baseline_multiplier() {
        let table = PricingTable::builtin();
        let breakdown = estimate(&table, &usage("t3.micro", 1, 744.0, "mars-north-1")).unwrap();
        assert!((breakdown.pricing.region_multiplier - 1.0).abs() < 1e-12);
        assert!((breakdown.pricing.monthly_cost - 8.63).abs() < 1e-9);
    }

    #[test]
    fn unknown_sku_is_an_error_never_zero_cost() {
        let table = PricingTable::builtin();
        let err = estimate(&table, &usage("t3.nano", 1, 744.0, "us-east-1")).unwrap_err();
        assert!(err.to_string().contains("t3.nano"));
    }

    #[test]
    fn zero_instances_cost_nothing() {
        let table = PricingTable::builtin();
        let breakdown = estimate(&table, &usage("t3.micro", 0, 744.0, "us-east-1")).unwrap();
        assert!((breakdown.pricing.monthly_cost - 0.0).abs() < 1e-12);
    }

    #[test]
    fn cost_monotonic_in_count_and_hours() {
        let table = PricingTable::builtin();
        let mut last = -1.0;
        for (instances, hours) in [(1, 10.0), (1, 200.0), (2, 200.0), (4, 744.0)] {
            let b = estimate(&table, &usage("t3.medium", instances, hours, "us-east-1")).unwrap();
            assert!(b.pricing.monthly_cost >= last);
            last = b.pricing.monthly_cost;
        }
    }
}
