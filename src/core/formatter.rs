/// Returns "$8.63" for dollar-scale amounts, at 2 decimals.
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Returns "$0.2000" for sub-cent invocation amounts, at 4 decimals.
pub fn format_usd4(amount: f64) -> String {
    format!("${:.4}", amount)
}

/// Returns "x1.15" for a region multiplier.
pub fn format_multiplier(multiplier: f64) -> String {
    format!("x{:.2}", multiplier)
}

/// Returns "2.0M" / "25.0K" / "42" for large quantities.
pub fn format_quantity(count: f64) -> String {
    if count >= 1_000_000.0 {
        format!("{:.1}M", count / 1_000_000.0)
    } else if count >= 1_000.0 {
        format!("{:.1}K", count / 1_000.0)
    } else {
        format!("{}", count)
    }
}

/// Returns "2 vCPU, 4 GB" for instance specs.
pub fn format_specs(vcpu: u32, memory_gb: f64) -> String {
    if memory_gb.fract() == 0.0 {
        format!("{} vCPU, {} GB", vcpu, memory_gb as u64)
    } else {
        format!("{} vCPU, {} GB", vcpu, memory_gb)
    }
}
