use thiserror::Error;

/// Typed failures signaled by calculators and the operation/resource
/// registries. The protocol adapter is the only place these are converted
/// into caller-visible error payloads.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Instance type not found: {0}")]
    UnknownSku(String),
    #[error("Service not found: {0}")]
    UnknownService(String),
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Resource not found: {0}")]
    UnknownResource(String),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
