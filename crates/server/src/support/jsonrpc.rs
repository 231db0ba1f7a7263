#![forbid(unsafe_code)]

use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcRequest {
    #[serde(default)]
    #[serde(rename = "jsonrpc")]
    pub(crate) _jsonrpc: Option<String>,
    pub(crate) method: String,
    #[serde(default)]
    pub(crate) id: Option<Value>,
    #[serde(default)]
    pub(crate) params: Option<Value>,
}

impl JsonRpcRequest {
    pub(crate) fn expects_response(&self) -> bool {
        !matches!(self.id.as_ref(), None | Some(Value::Null))
    }
}

pub(crate) fn json_rpc_response(id: Option<Value>, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

pub(crate) fn json_rpc_error(id: Option<Value>, code: i64, message: &str) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
}

pub(crate) fn json_rpc_notification(method: &str, params: Value) -> Value {
    json!({ "jsonrpc": "2.0", "method": method, "params": params })
}

/// Parses one framed body into a request, or the JSON-RPC error to send back.
pub(crate) fn parse_request(body: &[u8]) -> Result<JsonRpcRequest, Value> {
    let data: Value = serde_json::from_slice(body)
        .map_err(|e| json_rpc_error(None, -32700, &format!("Parse error: {e}")))?;

    let (id, has_method) = match data.as_object() {
        Some(obj) => (obj.get("id").cloned(), obj.contains_key("method")),
        None => return Err(json_rpc_error(None, -32600, "Invalid Request")),
    };
    if !has_method {
        return Err(json_rpc_error(id, -32600, "Invalid Request"));
    }

    serde_json::from_value::<JsonRpcRequest>(data)
        .map_err(|e| json_rpc_error(id, -32600, &format!("Invalid Request: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_request_reports_parse_and_shape_errors() {
        let err = parse_request(b"{not json").expect_err("parse error");
        assert_eq!(err["error"]["code"], -32700);

        let err = parse_request(b"[1,2]").expect_err("not an object");
        assert_eq!(err["error"]["code"], -32600);

        let err = parse_request(br#"{"id":7}"#).expect_err("missing method");
        assert_eq!(err["id"], 7);
        assert_eq!(err["error"]["code"], -32600);
    }

    #[test]
    fn notifications_do_not_expect_responses() {
        let req = parse_request(br#"{"jsonrpc":"2.0","method":"ping"}"#).expect("request");
        assert!(!req.expects_response());
        let req = parse_request(br#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#).expect("request");
        assert!(req.expects_response());
    }
}
