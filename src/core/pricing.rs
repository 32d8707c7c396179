use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::error::PricingError;

/// Hours in a billing month. Usage above this is clamped at the input layer.
pub const HOURS_PER_MONTH: f64 = 744.0;

/// Region assumed when a request carries no region code.
pub const BASELINE_REGION: &str = "us-east-1";

/// Revision stamp of the built-in price data.
pub const TABLE_VERSION: &str = "2024-06";

/// Hourly price and specs for one instance class (compute or database).
#[derive(Debug, Clone, Serialize)]
pub struct InstancePricing {
    pub hourly: f64,
    pub vcpu: u32,
    pub memory_gb: f64,
}

/// Unit prices for the single "standard" object-storage tier.
#[derive(Debug, Clone, Serialize)]
pub struct StoragePricing {
    /// Dollars per GB stored per month.
    pub storage_gb_month: f64,
    /// Dollars per 1000 GET requests.
    pub get_per_1k: f64,
    /// Dollars per 1000 PUT requests.
    pub put_per_1k: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabasePricing {
    pub instances: BTreeMap<String, InstancePricing>,
    /// Dollars per GB of database storage per month.
    pub storage_gb_month: f64,
}

/// Monthly allowance subtracted from billable invocation usage.
#[derive(Debug, Clone, Serialize)]
pub struct FreeTier {
    pub requests: f64,
    pub gb_seconds: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvocationPricing {
    /// Dollars per request.
    pub per_request: f64,
    /// Dollars per GB-second of execution.
    pub per_gb_second: f64,
    pub free_tier: FreeTier,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionInfo {
    pub name: String,
    /// Scalar (>= 1.0) applied to baseline unit prices.
    pub multiplier: f64,
}

/// Immutable price data for every supported service and region.
///
/// Constructed once at startup and passed by reference; never mutated
/// afterwards, so it is safe to share across any number of concurrent
/// readers.
#[derive(Debug, Clone, Serialize)]
pub struct PricingTable {
    pub version: String,
    pub compute: BTreeMap<String, InstancePricing>,
    pub storage: StoragePricing,
    pub database: DatabasePricing,
    pub invocation: InvocationPricing,
    pub regions: BTreeMap<String, RegionInfo>,
}

/// The services the table carries prices for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    Compute,
    Storage,
    Database,
    Invocation,
}

impl Service {
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "compute" | "ec2" => Some(Self::Compute),
            "storage" | "s3" => Some(Self::Storage),
            "database" | "rds" => Some(Self::Database),
            "invocation" | "lambda" | "functions" => Some(Self::Invocation),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Compute => "compute",
            Self::Storage => "storage",
            Self::Database => "database",
            Self::Invocation => "invocation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Compute => "Compute",
            Self::Storage => "Storage",
            Self::Database => "Database",
            Self::Invocation => "Invocation",
        }
    }

    /// All service variants in display order.
    pub fn all() -> &'static [Service] {
        &[
            Service::Compute,
            Service::Storage,
            Service::Database,
            Service::Invocation,
        ]
    }
}

fn instance(hourly: f64, vcpu: u32, memory_gb: f64) -> InstancePricing {
    InstancePricing {
        hourly,
        vcpu,
        memory_gb,
    }
}

fn region(name: &str, multiplier: f64) -> RegionInfo {
    RegionInfo {
        name: name.to_string(),
        multiplier,
    }
}

impl PricingTable {
    /// Build the built-in table (baseline-region unit prices).
    pub fn builtin() -> Self {
        let compute = BTreeMap::from([
            ("t3.micro".to_string(), instance(0.0116, 2, 1.0)),
            ("t3.small".to_string(), instance(0.0232, 2, 2.0)),
            ("t3.medium".to_string(), instance(0.0464, 2, 4.0)),
            ("t3.large".to_string(), instance(0.0928, 2, 8.0)),
            ("t3.xlarge".to_string(), instance(0.1856, 4, 16.0)),
        ]);

        let database_instances = BTreeMap::from([
            ("db.t3.micro".to_string(), instance(0.017, 2, 1.0)),
            ("db.t3.small".to_string(), instance(0.034, 2, 2.0)),
            ("db.t3.medium".to_string(), instance(0.068, 2, 4.0)),
        ]);

        let regions = BTreeMap::from([
            ("us-east-1".to_string(), region("N. Virginia", 1.0)),
            ("us-west-2".to_string(), region("Oregon", 1.05)),
            ("eu-west-1".to_string(), region("Ireland", 1.1)),
            ("ap-southeast-1".to_string(), region("Singapore", 1.15)),
        ]);

        Self {
            version: TABLE_VERSION.to_string(),
            compute,
            storage: StoragePricing {
                storage_gb_month: 0.023,
                get_per_1k: 0.0004,
                put_per_1k: 0.0005,
            },
            database: DatabasePricing {
                instances: database_instances,
                storage_gb_month: 0.115,
            },
            invocation: InvocationPricing {
                per_request: 0.0000002,
                per_gb_second: 0.0000166667,
                free_tier: FreeTier {
                    requests: 1_000_000.0,
                    gb_seconds: 400_000.0,
                },
            },
            regions,
        }
    }

    /// Look up a compute instance class. Unknown SKUs are an error, never a
    /// silent zero price.
    pub fn compute_sku(&self, sku: &str) -> Result<&InstancePricing, PricingError> {
        self.compute
            .get(sku)
            .ok_or_else(|| PricingError::UnknownSku(sku.to_string()))
    }

    /// Look up a database instance class.
    pub fn database_sku(&self, sku: &str) -> Result<&InstancePricing, PricingError> {
        self.database
            .instances
            .get(sku)
            .ok_or_else(|| PricingError::UnknownSku(sku.to_string()))
    }

    pub fn region(&self, code: &str) -> Option<&RegionInfo> {
        self.regions.get(code)
    }

    /// Price multiplier for a region code; unrecognized codes fall back to
    /// the baseline multiplier of 1.0.
    pub fn region_multiplier(&self, code: &str) -> f64 {
        self.regions.get(code).map(|r| r.multiplier).unwrap_or(1.0)
    }

    /// JSON dump of one service's pricing rows, as served to callers.
    pub fn service_pricing(&self, service: Service) -> serde_json::Value {
        let dump = match service {
            Service::Compute => serde_json::to_value(&self.compute),
            Service::Storage => serde_json::to_value(&self.storage),
            Service::Database => serde_json::to_value(&self.database),
            Service::Invocation => serde_json::to_value(&self.invocation),
        };
        dump.expect("pricing data serializes")
    }
}
