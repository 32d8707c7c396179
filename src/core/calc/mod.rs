pub mod compute;
pub mod database;
pub mod invocation;
pub mod storage;

/// Round to 2 decimals, for dollar-scale line items.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimals, for sub-cent invocation line items.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_half_up() {
        assert!((round2(2.304) - 2.3).abs() < 1e-12);
        assert!((round2(8.6304) - 8.63).abs() < 1e-12);
        assert!((round2(0.005) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn round4_keeps_sub_cent_costs() {
        assert!((round4(0.00012345) - 0.0001).abs() < 1e-12);
        assert!((round4(0.2) - 0.2).abs() < 1e-12);
    }
}
