use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::core::calc;
use crate::core::error::PricingError;
use crate::core::models::breakdown::PricingDump;
use crate::core::models::request::{ComputeUsage, InvocationUsage, StorageUsage};
use crate::core::pricing::{PricingTable, Service, BASELINE_REGION};

/// The closed set of operations exposed over the protocol. Adding or
/// removing one is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    ComputeCost,
    StorageCost,
    InvocationCost,
    PricingData,
}

impl Tool {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "calculate_compute_cost" => Some(Self::ComputeCost),
            "calculate_storage_cost" => Some(Self::StorageCost),
            "calculate_invocation_cost" => Some(Self::InvocationCost),
            "get_pricing_data" => Some(Self::PricingData),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ComputeCost => "calculate_compute_cost",
            Self::StorageCost => "calculate_storage_cost",
            Self::InvocationCost => "calculate_invocation_cost",
            Self::PricingData => "get_pricing_data",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ComputeCost => "Calculate the monthly cost of compute instances",
            Self::StorageCost => "Calculate the monthly cost of object storage",
            Self::InvocationCost => "Calculate the monthly cost of function invocations",
            Self::PricingData => "Get pricing data for a specific service",
        }
    }

    pub fn input_schema(&self) -> Value {
        match self {
            Self::ComputeCost => json!({
                "type": "object",
                "properties": {
                    "instance_type": { "type": "string", "description": "Instance class (e.g. t3.micro)" },
                    "instances": { "type": "number", "description": "Number of instances" },
                    "hours": { "type": "number", "description": "Hours per month (max 744)" },
                    "region": { "type": "string", "description": "Region code", "default": BASELINE_REGION }
                },
                "required": ["instance_type", "instances", "hours"]
            }),
            Self::StorageCost => json!({
                "type": "object",
                "properties": {
                    "storage_gb": { "type": "number", "description": "Stored data in GB" },
                    "requests_get": { "type": "number", "description": "GET requests (thousands)" },
                    "requests_put": { "type": "number", "description": "PUT requests (thousands)" },
                    "region": { "type": "string", "description": "Region code", "default": BASELINE_REGION }
                },
                "required": ["storage_gb"]
            }),
            Self::InvocationCost => json!({
                "type": "object",
                "properties": {
                    "requests_millions": { "type": "number", "description": "Requests in millions" },
                    "duration_ms": { "type": "number", "description": "Average duration in ms" },
                    "memory_mb": { "type": "number", "description": "Allocated memory in MB" },
                    "region": { "type": "string", "description": "Region code", "default": BASELINE_REGION }
                },
                "required": ["requests_millions", "duration_ms", "memory_mb"]
            }),
            Self::PricingData => json!({
                "type": "object",
                "properties": {
                    "service": {
                        "type": "string",
                        "enum": ["compute", "storage", "database", "invocation"],
                        "description": "Service to dump pricing for"
                    },
                    "region": { "type": "string", "description": "Region code", "default": BASELINE_REGION }
                },
                "required": ["service"]
            }),
        }
    }

    /// All tool variants in listing order.
    pub fn all() -> &'static [Tool] {
        &[
            Tool::ComputeCost,
            Tool::StorageCost,
            Tool::InvocationCost,
            Tool::PricingData,
        ]
    }
}

/// `tools/list` result.
pub fn list_tools() -> Value {
    let tools: Vec<Value> = Tool::all()
        .iter()
        .map(|tool| {
            json!({
                "name": tool.name(),
                "description": tool.description(),
                "inputSchema": tool.input_schema(),
            })
        })
        .collect();
    json!({ "tools": tools })
}

/// `tools/call` result. Every failure below this point (unknown tool,
/// malformed arguments, unknown SKU) is converted here into an error-text
/// content block inside a normal result; the caller never sees an
/// exception and the process never dies on a bad request.
pub fn call_tool(table: &PricingTable, name: &str, arguments: Value) -> Value {
    let text = match dispatch(table, name, arguments) {
        Ok(payload) => payload,
        Err(err) => format!("Error: {}", err),
    };
    json!({ "content": [{ "type": "text", "text": text }] })
}

#[derive(Deserialize)]
struct PricingDataArgs {
    service: String,
    #[serde(default = "baseline_region")]
    region: String,
}

fn baseline_region() -> String {
    BASELINE_REGION.to_string()
}

fn parse_args<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T, PricingError> {
    serde_json::from_value(arguments).map_err(|err| PricingError::InvalidArguments(err.to_string()))
}

fn to_pretty_json<T: serde::Serialize>(payload: &T) -> String {
    serde_json::to_string_pretty(payload).expect("breakdown serializes")
}

fn dispatch(table: &PricingTable, name: &str, arguments: Value) -> Result<String, PricingError> {
    let tool = Tool::from_name(name).ok_or_else(|| PricingError::UnknownTool(name.to_string()))?;

    match tool {
        Tool::ComputeCost => {
            let usage: ComputeUsage = parse_args(arguments)?;
            let breakdown = calc::compute::estimate(table, &usage.sanitized())?;
            Ok(to_pretty_json(&breakdown))
        }
        Tool::StorageCost => {
            let usage: StorageUsage = parse_args(arguments)?;
            let breakdown = calc::storage::estimate(table, &usage.sanitized());
            Ok(to_pretty_json(&breakdown))
        }
        Tool::InvocationCost => {
            let usage: InvocationUsage = parse_args(arguments)?;
            let breakdown = calc::invocation::estimate(table, &usage.sanitized());
            Ok(to_pretty_json(&breakdown))
        }
        Tool::PricingData => {
            let args: PricingDataArgs = parse_args(arguments)?;
            let service = Service::from_id(&args.service)
                .ok_or_else(|| PricingError::UnknownService(args.service.clone()))?;
            let dump = PricingDump {
                service: service.id(),
                region: args.region.clone(),
                region_info: table.region(&args.region).cloned(),
                pricing_data: table.service_pricing(service),
                last_updated: Utc::now(),
            };
            Ok(to_pretty_json(&dump))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_text(result: &Value) -> &str {
        result["content"][0]["text"].as_str().unwrap()
    }

    #[test]
    fn list_tools_has_four_entries_with_schemas() {
        let listed = list_tools();
        let tools = listed["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 4);
        for tool in tools {
            assert!(tool["name"].is_string());
            assert!(tool["description"].is_string());
            assert_eq!(tool["inputSchema"]["type"], "object");
        }
    }

    #[test]
    fn tool_names_round_trip() {
        for tool in Tool::all() {
            assert_eq!(Tool::from_name(tool.name()), Some(*tool));
        }
        assert_eq!(Tool::from_name("calculate_dns_cost"), None);
    }

    #[test]
    fn call_compute_returns_breakdown_json() {
        let table = PricingTable::builtin();
        let result = call_tool(
            &table,
            "calculate_compute_cost",
            json!({"instance_type": "t3.micro", "instances": 1, "hours": 744}),
        );
        let payload: Value = serde_json::from_str(content_text(&result)).unwrap();
        assert_eq!(payload["service"], "compute");
        assert!((payload["pricing"]["monthly_cost"].as_f64().unwrap() - 8.63).abs() < 1e-9);
    }

    #[test]
    fn call_compute_clamps_hours_before_computing() {
        let table = PricingTable::builtin();
        let result = call_tool(
            &table,
            "calculate_compute_cost",
            json!({"instance_type": "t3.micro", "instances": 1, "hours": 1000}),
        );
        let payload: Value = serde_json::from_str(content_text(&result)).unwrap();
        assert!((payload["hours"].as_f64().unwrap() - 744.0).abs() < 1e-12);
    }

    #[test]
    fn call_with_unknown_sku_reports_error_text_naming_it() {
        let table = PricingTable::builtin();
        let result = call_tool(
            &table,
            "calculate_compute_cost",
            json!({"instance_type": "t3.nano", "instances": 1, "hours": 10}),
        );
        let text = content_text(&result);
        assert!(text.starts_with("Error:"));
        assert!(text.contains("t3.nano"));
        // No cost payload on the error path.
        assert!(serde_json::from_str::<Value>(text).is_err());
    }

    #[test]
    fn call_unknown_tool_reports_error_text() {
        let table = PricingTable::builtin();
        let result = call_tool(&table, "calculate_dns_cost", json!({}));
        let text = content_text(&result);
        assert!(text.starts_with("Error:"));
        assert!(text.contains("calculate_dns_cost"));
    }

    #[test]
    fn call_with_missing_required_field_reports_error_text() {
        let table = PricingTable::builtin();
        let result = call_tool(&table, "calculate_compute_cost", json!({"instances": 1}));
        assert!(content_text(&result).starts_with("Error:"));
    }

    #[test]
    fn call_storage_defaults_requests_to_zero() {
        let table = PricingTable::builtin();
        let result = call_tool(&table, "calculate_storage_cost", json!({"storage_gb": 100}));
        let payload: Value = serde_json::from_str(content_text(&result)).unwrap();
        assert!((payload["pricing"]["total_monthly_cost"].as_f64().unwrap() - 2.30).abs() < 1e-9);
    }

    #[test]
    fn call_invocation_surfaces_intermediates() {
        let table = PricingTable::builtin();
        let result = call_tool(
            &table,
            "calculate_invocation_cost",
            json!({"requests_millions": 2, "duration_ms": 100, "memory_mb": 128}),
        );
        let payload: Value = serde_json::from_str(content_text(&result)).unwrap();
        let calcs = &payload["calculations"];
        assert!((calcs["total_requests"].as_f64().unwrap() - 2_000_000.0).abs() < 1e-6);
        assert!((calcs["gb_seconds"].as_f64().unwrap() - 25_000.0).abs() < 1e-6);
        assert!((calcs["billable_requests"].as_f64().unwrap() - 1_000_000.0).abs() < 1e-6);
        assert!((payload["pricing"]["requests_cost"].as_f64().unwrap() - 0.2).abs() < 1e-9);
        assert_eq!(payload["free_tier_applied"], true);
    }

    #[test]
    fn get_pricing_data_for_each_service() {
        let table = PricingTable::builtin();
        for id in ["compute", "storage", "database", "invocation"] {
            let result = call_tool(&table, "get_pricing_data", json!({"service": id}));
            let payload: Value = serde_json::from_str(content_text(&result)).unwrap();
            assert_eq!(payload["service"], id);
            assert!(payload["pricing_data"].is_object());
            assert!(payload["region_info"]["multiplier"].is_number());
        }
    }

    #[test]
    fn get_pricing_data_unknown_service_is_error_text() {
        let table = PricingTable::builtin();
        let result = call_tool(&table, "get_pricing_data", json!({"service": "dns"}));
        let text = content_text(&result);
        assert!(text.starts_with("Error:"));
        assert!(text.contains("dns"));
    }
}
