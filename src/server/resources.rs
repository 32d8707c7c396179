use serde_json::{json, Value};

use crate::core::error::PricingError;
use crate::core::pricing::PricingTable;

/// The closed set of read-only resources exposed over the protocol: one
/// pricing dump per invokable service plus the region-multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    ComputePricing,
    StoragePricing,
    InvocationPricing,
    Regions,
}

impl ResourceKind {
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            "pricing://compute" => Some(Self::ComputePricing),
            "pricing://storage" => Some(Self::StoragePricing),
            "pricing://invocation" => Some(Self::InvocationPricing),
            "pricing://regions" => Some(Self::Regions),
            _ => None,
        }
    }

    pub fn uri(&self) -> &'static str {
        match self {
            Self::ComputePricing => "pricing://compute",
            Self::StoragePricing => "pricing://storage",
            Self::InvocationPricing => "pricing://invocation",
            Self::Regions => "pricing://regions",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ComputePricing => "Compute pricing",
            Self::StoragePricing => "Storage pricing",
            Self::InvocationPricing => "Invocation pricing",
            Self::Regions => "Regions",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ComputePricing => "Hourly rates and specs for compute instance classes",
            Self::StoragePricing => "Unit prices for the standard object-storage tier",
            Self::InvocationPricing => "Per-request and per-GB-second rates with free tier",
            Self::Regions => "Region codes with price multipliers",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        "application/json"
    }

    /// All resource variants in listing order.
    pub fn all() -> &'static [ResourceKind] {
        &[
            ResourceKind::ComputePricing,
            ResourceKind::StoragePricing,
            ResourceKind::InvocationPricing,
            ResourceKind::Regions,
        ]
    }
}

/// `resources/list` result.
pub fn list_resources() -> Value {
    let resources: Vec<Value> = ResourceKind::all()
        .iter()
        .map(|kind| {
            json!({
                "uri": kind.uri(),
                "mimeType": kind.mime_type(),
                "name": kind.name(),
                "description": kind.description(),
            })
        })
        .collect();
    json!({ "resources": resources })
}

/// `resources/read` result, or a typed error for unrecognized URIs.
pub fn read_resource(table: &PricingTable, uri: &str) -> Result<Value, PricingError> {
    let kind =
        ResourceKind::from_uri(uri).ok_or_else(|| PricingError::UnknownResource(uri.to_string()))?;

    let dump = match kind {
        ResourceKind::ComputePricing => serde_json::to_string_pretty(&table.compute),
        ResourceKind::StoragePricing => serde_json::to_string_pretty(&table.storage),
        ResourceKind::InvocationPricing => serde_json::to_string_pretty(&table.invocation),
        ResourceKind::Regions => serde_json::to_string_pretty(&table.regions),
    }
    .expect("pricing data serializes");

    Ok(json!({
        "contents": [{
            "uri": kind.uri(),
            "mimeType": kind.mime_type(),
            "text": dump,
        }]
    }))
}
