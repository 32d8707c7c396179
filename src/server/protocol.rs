use serde::Deserialize;
use serde_json::{json, Value};

/// Protocol revision reported by `initialize`.
pub const PROTOCOL_VERSION: &str = "2025-06-18";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const SERVER_ERROR: i64 = -32000;

/// A single JSON-RPC 2.0 request. Requests without an id are notifications
/// and receive no reply.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

pub fn jsonrpc_result(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

pub fn jsonrpc_error(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_request_with_params() {
        let req: JsonRpcRequest = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"x"}}"#,
        )
        .unwrap();
        assert_eq!(req.jsonrpc.as_deref(), Some("2.0"));
        assert_eq!(req.method, "tools/call");
        assert!(req.id.is_some());
        assert!(req.params.is_some());
    }

    #[test]
    fn parse_notification_has_no_id() {
        let req: JsonRpcRequest = serde_json::from_str(
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        )
        .unwrap();
        assert!(req.id.is_none());
    }

    #[test]
    fn error_envelope_shape() {
        let err = jsonrpc_error(json!(7), METHOD_NOT_FOUND, "Method not found");
        assert_eq!(err["jsonrpc"], "2.0");
        assert_eq!(err["id"], 7);
        assert_eq!(err["error"]["code"], -32601);
        assert_eq!(err["error"]["message"], "Method not found");
    }

    #[test]
    fn result_envelope_shape() {
        let ok = jsonrpc_result(json!("abc"), json!({"tools": []}));
        assert_eq!(ok["id"], "abc");
        assert!(ok["result"]["tools"].is_array());
        assert!(ok.get("error").is_none());
    }
}
