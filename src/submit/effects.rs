//! Injected side-effect capabilities (no ambient toast/router singletons).

use tracing::{info, warn};

/// User-visible notification sink. Exactly one call per attempt.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Route navigation, fired at most once per attempt, after success only.
pub trait Navigator: Send + Sync {
    fn push(&self, route: &str);
}

/// Notifier that only logs; useful where no UI layer is attached yet.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!(message, "notification");
    }

    fn error(&self, message: &str) {
        warn!(message, "notification");
    }
}
