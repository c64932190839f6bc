use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::PublicInfoTracker;

/// Handle to the background refresh task. Dropping it also stops the loop.
#[derive(Debug)]
pub struct RefreshHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Stop the loop and wait for it to exit. A refresh in flight is abandoned.
    pub async fn shutdown(self) {
        let _ = self.stop.send(true);
        if let Err(e) = self.task.await {
            log::error!("Public info refresh task ended abnormally: {e}");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Refresh `tracker` every `every`, starting one interval from now.
/// Failures are logged and the stale snapshot is kept.
pub fn spawn_refresh_loop(tracker: Arc<PublicInfoTracker>, every: Duration) -> RefreshHandle {
    let (stop, mut stopped) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + every, every);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = stopped.changed() => break,
                _ = interval.tick() => {
                    log::info!("Running public info refresh");
                    tokio::select! {
                        _ = stopped.changed() => break,
                        result = tracker.refresh() => {
                            if let Err(e) = result {
                                log::error!("Public info refresh failed, keeping previous snapshot: {e}");
                            }
                        }
                    }
                }
            }
        }
        log::info!("Public info refresh loop stopped");
    });

    RefreshHandle { stop, task }
}
