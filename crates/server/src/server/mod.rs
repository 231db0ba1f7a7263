#![forbid(unsafe_code)]

mod lifecycle;

use crate::support::{RevalidationQueue, json_rpc_notification};
use qa_storage::SqliteStore;
use serde_json::{Value, json};

pub(crate) struct ActionServer {
    initialized: bool,
    store: SqliteStore,
    revalidation: RevalidationQueue,
}

impl ActionServer {
    pub(crate) fn new(store: SqliteStore) -> Self {
        Self {
            initialized: false,
            store,
            revalidation: RevalidationQueue::default(),
        }
    }

    /// Notifications queued while handling the last request, in order.
    pub(crate) fn take_notifications(&mut self) -> Vec<Value> {
        self.revalidation
            .drain()
            .into_iter()
            .map(|path| json_rpc_notification("notifications/revalidate", json!({ "path": path })))
            .collect()
    }
}
