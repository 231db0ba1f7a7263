#![forbid(unsafe_code)]

/// Receives the client path whose cached rendering is stale after a
/// successful mutation. Fire-and-forget: implementations must not fail.
pub(crate) trait Revalidate {
    fn revalidate(&mut self, path: &str);
}

/// Collects paths until the transport flushes them as notifications.
#[derive(Debug, Default)]
pub(crate) struct RevalidationQueue {
    paths: Vec<String>,
}

impl RevalidationQueue {
    pub(crate) fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.paths)
    }
}

impl Revalidate for RevalidationQueue {
    fn revalidate(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() || self.paths.iter().any(|p| p == path) {
            return;
        }
        self.paths.push(path.to_string());
    }
}
