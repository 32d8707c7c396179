use serde::Deserialize;

use crate::core::pricing::{BASELINE_REGION, HOURS_PER_MONTH};

fn default_region() -> String {
    BASELINE_REGION.to_string()
}

fn default_memory_mb() -> f64 {
    128.0
}

/// Usage inputs for hourly-billed compute instances.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeUsage {
    pub instance_type: String,
    pub instances: i64,
    pub hours: f64,
    #[serde(default = "default_region")]
    pub region: String,
}

impl ComputeUsage {
    /// Clamp out-of-range numeric inputs to the valid boundary. This is the
    /// input-validation layer; calculators assume sanitized records.
    pub fn sanitized(mut self) -> Self {
        self.instances = self.instances.max(0);
        self.hours = self.hours.clamp(0.0, HOURS_PER_MONTH);
        self
    }
}

/// Usage inputs for object storage. Request counts are in thousands.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageUsage {
    pub storage_gb: f64,
    #[serde(default)]
    pub requests_get: f64,
    #[serde(default)]
    pub requests_put: f64,
    #[serde(default = "default_region")]
    pub region: String,
}

impl StorageUsage {
    pub fn sanitized(mut self) -> Self {
        self.storage_gb = self.storage_gb.max(0.0);
        self.requests_get = self.requests_get.max(0.0);
        self.requests_put = self.requests_put.max(0.0);
        self
    }
}

/// Usage inputs for a managed database, billed for a full month.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseUsage {
    pub instance_type: String,
    pub instances: i64,
    #[serde(default)]
    pub storage_gb: f64,
    #[serde(default = "default_region")]
    pub region: String,
}

impl DatabaseUsage {
    pub fn sanitized(mut self) -> Self {
        self.instances = self.instances.max(0);
        self.storage_gb = self.storage_gb.max(0.0);
        self
    }
}

/// Usage inputs for function invocations. Requests are in millions.
#[derive(Debug, Clone, Deserialize)]
pub struct InvocationUsage {
    pub requests_millions: f64,
    #[serde(default)]
    pub duration_ms: f64,
    #[serde(default = "default_memory_mb")]
    pub memory_mb: f64,
    #[serde(default = "default_region")]
    pub region: String,
}

impl InvocationUsage {
    pub fn sanitized(mut self) -> Self {
        self.requests_millions = self.requests_millions.max(0.0);
        self.duration_ms = self.duration_ms.max(0.0);
        self.memory_mb = self.memory_mb.max(0.0);
        self
    }
}
