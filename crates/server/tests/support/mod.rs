#![forbid(unsafe_code)]
#![allow(dead_code)]

use serde_json::{Value, json};
use std::io::{BufRead, BufReader, Write};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tempfile::TempDir;

pub(crate) struct Server {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    next_id: i64,
    notifications: Vec<Value>,
    _storage: Option<TempDir>,
}

impl Server {
    pub(crate) fn start() -> Self {
        let storage = tempfile::tempdir().expect("temp dir");
        let mut server = Self::spawn(&[OsStr::new("--storage-dir"), storage.path().as_os_str()]);
        server._storage = Some(storage);
        server
    }

    pub(crate) fn start_in_memory(extra_args: &[&str]) -> Self {
        let mut args = vec![OsStr::new("--in-memory")];
        args.extend(extra_args.iter().map(|arg| OsStr::new(*arg)));
        Self::spawn(&args)
    }

    pub(crate) fn start_at(storage_dir: &Path) -> Self {
        Self::spawn(&[OsStr::new("--storage-dir"), storage_dir.as_os_str()])
    }

    fn spawn(args: &[&OsStr]) -> Self {
        let mut child = Command::new(env!("CARGO_BIN_EXE_qa_server"))
            .args(args)
            .env_remove("QA_STORAGE_DIR")
            .env_remove("QA_QUESTION_AUTHOR_DELTA")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn qa_server");

        let stdin = child.stdin.take().expect("stdin");
        let stdout = BufReader::new(child.stdout.take().expect("stdout"));
        Self {
            child,
            stdin,
            stdout,
            next_id: 100,
            notifications: Vec::new(),
            _storage: None,
        }
    }

    pub(crate) fn send(&mut self, req: Value) {
        writeln!(self.stdin, "{req}").expect("write request");
        self.stdin.flush().expect("flush request");
    }

    pub(crate) fn send_raw(&mut self, line: &str) {
        writeln!(self.stdin, "{line}").expect("write raw line");
        self.stdin.flush().expect("flush raw line");
    }

    /// Reads the next response, buffering any server notifications seen
    /// before it.
    pub(crate) fn recv(&mut self) -> Value {
        loop {
            let mut line = String::new();
            self.stdout.read_line(&mut line).expect("read response");
            assert!(!line.trim().is_empty(), "empty response line");
            let value: Value = serde_json::from_str(&line).expect("parse response json");
            if value.get("id").is_none() && value.get("method").is_some() {
                self.notifications.push(value);
                continue;
            }
            return value;
        }
    }

    /// Notifications received so far. Those sent after the latest response
    /// only show up once a later request has been answered.
    pub(crate) fn take_notifications(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.notifications)
    }

    pub(crate) fn ping(&mut self) {
        self.next_id += 1;
        let resp = self.request(json!({ "jsonrpc": "2.0", "id": self.next_id, "method": "ping" }));
        assert_eq!(resp["id"], self.next_id, "ping failed: {resp}");
    }

    pub(crate) fn request(&mut self, req: Value) -> Value {
        self.send(req);
        self.recv()
    }

    pub(crate) fn initialize(&mut self) {
        let resp = self.request(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": { "protocolVersion": "2024-11-05", "clientInfo": { "name": "test", "version": "0" } }
        }));
        assert!(resp.get("result").is_some(), "initialize failed: {resp}");
        self.send(json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }));
    }

    /// Calls an action and returns its envelope (`result` of the JSON-RPC
    /// response).
    pub(crate) fn call(&mut self, name: &str, arguments: Value) -> Value {
        self.next_id += 1;
        let resp = self.request(json!({
            "jsonrpc": "2.0",
            "id": self.next_id,
            "method": "actions/call",
            "params": { "name": name, "arguments": arguments }
        }));
        assert_eq!(resp["id"], self.next_id, "response id mismatch: {resp}");
        resp.get("result").cloned().expect("result envelope")
    }

    /// Calls an action that must succeed and returns its `result` payload.
    pub(crate) fn ok(&mut self, name: &str, arguments: Value) -> Value {
        let envelope = self.call(name, arguments);
        assert_eq!(envelope["success"], true, "{name} failed: {envelope}");
        envelope["result"].clone()
    }

    pub(crate) fn create_user(&mut self, username: &str) -> String {
        let user = self.ok(
            "user.create",
            json!({
                "name": format!("{username} name"),
                "username": username,
                "email": format!("{username}@example.test"),
            }),
        );
        user["id"].as_str().expect("user id").to_string()
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub(crate) fn error_code(envelope: &Value) -> &str {
    envelope["error"]["code"].as_str().expect("error.code")
}
