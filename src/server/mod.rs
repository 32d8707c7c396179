pub mod protocol;
pub mod resources;
pub mod tools;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::core::pricing::PricingTable;
use crate::server::protocol::{
    jsonrpc_error, jsonrpc_result, JsonRpcRequest, INVALID_PARAMS, INVALID_REQUEST,
    METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION, SERVER_ERROR,
};

/// Serve the protocol on stdio: one JSON-RPC request per line in, one
/// response per line out. Diagnostics go to stderr; stdout carries only
/// protocol frames. The pricing table is built before the first request
/// and shared read-only for the life of the process.
pub async fn run(table: PricingTable) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    info!(version = %table.version, "pricing server listening on stdio");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(response) = handle_line(&table, line) {
            let mut frame = serde_json::to_vec(&response)?;
            frame.push(b'\n');
            stdout.write_all(&frame).await?;
            stdout.flush().await?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}

/// Handle one raw input line. Returns None for notifications.
pub fn handle_line(table: &PricingTable, line: &str) -> Option<Value> {
    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(err) => {
            warn!(%err, "discarding unparseable frame");
            return Some(jsonrpc_error(Value::Null, PARSE_ERROR, "Parse error"));
        }
    };
    if value.is_array() {
        return Some(jsonrpc_error(Value::Null, INVALID_REQUEST, "Invalid Request"));
    }
    let rpc: JsonRpcRequest = match serde_json::from_value(value) {
        Ok(rpc) => rpc,
        Err(_) => {
            return Some(jsonrpc_error(Value::Null, INVALID_REQUEST, "Invalid Request"));
        }
    };
    handle_request(table, rpc)
}

/// Dispatch one parsed request. Calculator errors never surface here as
/// protocol errors: `tools/call` folds them into its result payload, so
/// only protocol-level failures produce JSON-RPC error objects.
pub fn handle_request(table: &PricingTable, rpc: JsonRpcRequest) -> Option<Value> {
    debug!(method = %rpc.method, "request");

    // Notifications get no reply.
    let id = rpc.id?;

    if rpc.jsonrpc.as_deref() != Some("2.0") {
        return Some(jsonrpc_error(id, INVALID_REQUEST, "Invalid Request"));
    }

    let response = match rpc.method.as_str() {
        "initialize" => jsonrpc_result(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "serverInfo": {
                    "name": "cloudcost",
                    "version": env!("CARGO_PKG_VERSION"),
                },
                "capabilities": {
                    "tools": {},
                    "resources": {},
                },
            }),
        ),
        "notifications/initialized" => return None,
        "ping" => jsonrpc_result(id, json!({})),
        "tools/list" => jsonrpc_result(id, tools::list_tools()),
        "tools/call" => {
            let Some(params) = rpc.params.as_ref() else {
                return Some(jsonrpc_error(id, INVALID_PARAMS, "Invalid params"));
            };
            let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
            if name.trim().is_empty() {
                return Some(jsonrpc_error(id, INVALID_PARAMS, "Invalid params"));
            }
            let arguments = params.get("arguments").cloned().unwrap_or(json!({}));
            jsonrpc_result(id, tools::call_tool(table, name, arguments))
        }
        "resources/list" => jsonrpc_result(id, resources::list_resources()),
        "resources/read" => {
            let uri = rpc
                .params
                .as_ref()
                .and_then(|params| params.get("uri"))
                .and_then(|value| value.as_str())
                .unwrap_or("");
            if uri.is_empty() {
                return Some(jsonrpc_error(id, INVALID_PARAMS, "Invalid params"));
            }
            match resources::read_resource(table, uri) {
                Ok(result) => jsonrpc_result(id, result),
                Err(err) => jsonrpc_error(id, SERVER_ERROR, &err.to_string()),
            }
        }
        _ => jsonrpc_error(id, METHOD_NOT_FOUND, "Method not found"),
    };

    Some(response)
}
