#![forbid(unsafe_code)]

use qa_storage::{ErrorKind, StoreError};
use serde_json::{Value, json};

/// Failure returned by an action, rendered into the `error` member of the
/// response envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ActionError {
    pub(crate) kind: ErrorKind,
    pub(crate) message: String,
}

impl ActionError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub(crate) fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub(crate) fn to_value(&self) -> Value {
        json!({ "code": self.code(), "message": self.message })
    }
}

impl From<StoreError> for ActionError {
    fn from(err: StoreError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

pub(crate) type ActionResult = Result<Value, ActionError>;

pub(crate) fn action_ok(action: &str, result: Value) -> Value {
    json!({ "success": true, "action": action, "result": result, "error": Value::Null })
}

pub(crate) fn action_err(action: &str, err: &ActionError) -> Value {
    json!({ "success": false, "action": action, "result": Value::Null, "error": err.to_value() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use qa_core::{EntityId, QuestionId};

    #[test]
    fn store_errors_keep_their_code() {
        let id = QuestionId::try_new("Q-000009").expect("id");
        let err = ActionError::from(StoreError::not_found(&id));
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.message, "question not found: Q-000009");

        let body = action_err("question.get", &err);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["result"].is_null());
    }

    #[test]
    fn ok_envelope_has_null_error() {
        let body = action_ok("ping", json!({"pong": true}));
        assert_eq!(body["success"], true);
        assert!(body["error"].is_null());
    }
}
