use std::{sync::Arc, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

use super::PriceRefresher;
use crate::config::DEFAULT_REFRESH_SECS;

pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(DEFAULT_REFRESH_SECS);

/// Periodic timer around [`PriceRefresher::refresh`].
///
/// Fires once immediately and then every `period`. Each tick spawns its own
/// refresh, so a slow request does not hold back the next one. Stopping (or
/// dropping) the scheduler cancels the timer only; refreshes already in
/// flight still land on the board.
pub struct RefreshScheduler {
    timer: JoinHandle<()>,
}

impl RefreshScheduler {
    /// Must be called from within a tokio runtime. Panics if `period` is zero.
    pub fn start(refresher: Arc<PriceRefresher>, period: Duration) -> Self {
        let timer = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let refresher = refresher.clone();
                tokio::spawn(async move { refresher.refresh().await });
            }
        });

        log::info!("Refreshing prices every {}s", period.as_secs_f64());

        Self { timer }
    }

    pub fn stop(&self) {
        self.timer.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.timer.is_finished()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.timer.abort();
    }
}
