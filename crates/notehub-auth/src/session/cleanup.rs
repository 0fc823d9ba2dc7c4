//! Expired-session sweeper.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::store::SessionStore;

/// Periodically sweeps expired sessions out of the local store.
///
/// Only deployments that hold sessions locally run this; with a remote
/// backend the session authority sweeps its own store.
pub struct SessionCleanup {
    store: Arc<SessionStore>,
    interval: Duration,
}

impl SessionCleanup {
    pub fn new(store: Arc<SessionStore>, interval_seconds: u64) -> Self {
        Self {
            store,
            interval: Duration::from_secs(interval_seconds),
        }
    }

    /// Runs sweep passes until the shutdown signal flips to true.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!(interval_seconds = self.interval.as_secs(), "Session cleanup started");
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = self.store.sweep_expired();
                    if removed > 0 {
                        info!(removed, "Swept expired sessions");
                    } else {
                        debug!("No expired sessions to sweep");
                    }
                }
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("Session cleanup stopping");
                        break;
                    }
                }
            }
        }
    }
}
