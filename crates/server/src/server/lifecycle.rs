#![forbid(unsafe_code)]

use super::ActionServer;
use crate::actions::{action_definitions, find_action};
use crate::support::{
    ActionError, JsonRpcRequest, Revalidate, action_err, action_ok, json_rpc_error,
    json_rpc_response,
};
use qa_storage::ErrorKind;
use serde_json::{Value, json};

impl ActionServer {
    pub(crate) fn handle(&mut self, request: JsonRpcRequest) -> Option<Value> {
        let method = request.method.as_str();
        let expects_response = request.expects_response();

        if method == "initialize" {
            self.initialized = true;
            let protocol_version = request
                .params
                .as_ref()
                .and_then(|v| v.get("protocolVersion"))
                .and_then(|v| v.as_str())
                .unwrap_or(crate::PROTOCOL_VERSION);
            return Some(json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": protocol_version,
                    "serverInfo": {
                        "name": crate::SERVER_NAME,
                        "version": crate::SERVER_VERSION,
                    },
                    "capabilities": { "actions": {}, "revalidate": {} },
                }),
            ));
        }

        if method == "notifications/initialized" || method == "initialized" {
            self.initialized = true;
            return None;
        }

        if !self.initialized {
            // First real request initializes implicitly.
            if matches!(method, "actions/call" | "actions/list" | "ping") {
                self.initialized = true;
            } else if expects_response {
                return Some(json_rpc_error(request.id, -32002, "Server not initialized"));
            } else {
                return None;
            }
        }

        match method {
            "ping" => Some(json_rpc_response(request.id, json!({}))),
            "actions/list" => Some(json_rpc_response(
                request.id,
                json!({ "actions": action_definitions() }),
            )),
            "actions/call" => {
                let Some(params) = request.params.as_ref().and_then(Value::as_object) else {
                    return Some(json_rpc_error(
                        request.id,
                        -32602,
                        "params must be an object",
                    ));
                };
                let name = params.get("name").and_then(Value::as_str).unwrap_or("");
                let args = params.get("arguments").cloned().unwrap_or(Value::Null);
                let body = self.call_action(name, args);
                if expects_response {
                    Some(json_rpc_response(request.id, body))
                } else {
                    None
                }
            }
            _ if !expects_response => None,
            _ => Some(json_rpc_error(
                request.id,
                -32601,
                &format!("Method not found: {method}"),
            )),
        }
    }

    /// Runs one action and wraps its outcome in the response envelope.
    pub(crate) fn call_action(&mut self, name: &str, args: Value) -> Value {
        let name = name.trim();
        let Some(def) = find_action(name) else {
            tracing::warn!(action = name, "unknown action");
            return action_err(
                name,
                &ActionError::invalid(format!("unknown action: {name}")),
            );
        };

        let args = match args {
            Value::Null => serde_json::Map::new(),
            Value::Object(map) => map,
            _ => {
                return action_err(
                    def.name,
                    &ActionError::invalid("arguments must be an object"),
                );
            }
        };

        match (def.handler)(&mut self.store, &args) {
            Ok(result) => {
                if def.mutates
                    && let Some(path) = args.get("path").and_then(Value::as_str)
                {
                    self.revalidation.revalidate(path);
                }
                tracing::debug!(action = def.name, "action ok");
                action_ok(def.name, result)
            }
            Err(err) => {
                match err.kind {
                    ErrorKind::Persistence => {
                        tracing::error!(action = def.name, error = %err.message, "action failed");
                    }
                    ErrorKind::NotFound | ErrorKind::Validation => {
                        tracing::warn!(action = def.name, code = err.code(), error = %err.message, "action rejected");
                    }
                }
                action_err(def.name, &err)
            }
        }
    }
}
