//! Queue poller
//!
//! Polls the queue endpoint on a fixed interval and publishes each outcome as
//! a new [`PollState`]. Every tick spawns its cycle as a separate task so a
//! slow request never delays the timer. Completions are applied one at a time
//! under a single lock, replacing the whole state and then notifying the
//! display sink.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cardqueue_client::{ClientError, QueueSource};
use cardqueue_core::domain::job::JobRecord;
use cardqueue_core::domain::status::PollState;
use chrono::Local;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::display::DisplaySink;

/// Last published state and the cycle that produced it
struct Published {
    state: Arc<PollState>,
    cycle: u64,
}

/// State shared between the poller handle and its tasks
struct Shared {
    source: Arc<dyn QueueSource>,
    sink: Arc<dyn DisplaySink>,
    published: Mutex<Published>,
    next_cycle: AtomicU64,
}

/// Handle of an active timer
struct Running {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Periodically fetches the queue and publishes the result
pub struct QueuePoller {
    shared: Arc<Shared>,
    running: Option<Running>,
}

impl QueuePoller {
    /// Creates a stopped poller in the loading state
    pub fn new(source: Arc<dyn QueueSource>, sink: Arc<dyn DisplaySink>) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                sink,
                published: Mutex::new(Published {
                    state: Arc::new(PollState::loading()),
                    cycle: 0,
                }),
                next_cycle: AtomicU64::new(0),
            }),
            running: None,
        }
    }

    /// Starts polling: one fetch right away, then one per `interval`
    ///
    /// A poller that is already running is stopped first, so at most one
    /// timer is ever active. Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns an error for a zero interval; the poller is left untouched.
    pub fn start(&mut self, interval: Duration) -> anyhow::Result<()> {
        if interval.is_zero() {
            anyhow::bail!("poll interval must be greater than 0");
        }

        self.stop();

        info!("Starting queue poller (interval: {:?})", interval);

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(Self::run_timer(
            Arc::clone(&self.shared),
            cancel.clone(),
            interval,
        ));

        self.running = Some(Running { cancel, handle });

        Ok(())
    }

    /// Stops polling
    ///
    /// Requests still in flight may finish, but their results are dropped.
    /// Once this returns no further state change or display notification
    /// happens.
    pub fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };

        running.cancel.cancel();
        // a completion already holding the lock finishes before we return;
        // any later one sees the cancelled token
        drop(self.shared.lock());
        running.handle.abort();

        info!("Queue poller stopped");
    }

    /// Whether a timer is active
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Current published state
    pub fn state(&self) -> Arc<PollState> {
        Arc::clone(&self.shared.lock().state)
    }

    /// Timer loop; spawns one cycle per tick until cancelled
    async fn run_timer(shared: Arc<Shared>, cancel: CancellationToken, interval: Duration) {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let cycle = shared.next_cycle.fetch_add(1, Ordering::Relaxed) + 1;
                    debug!("Starting poll cycle {}", cycle);
                    tokio::spawn(Shared::run_cycle(Arc::clone(&shared), cancel.clone(), cycle));
                }
            }
        }

        debug!("Poll timer exited");
    }
}

impl Drop for QueuePoller {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Published> {
        self.published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Performs a single fetch and applies its outcome
    async fn run_cycle(self: Arc<Self>, cancel: CancellationToken, cycle: u64) {
        let outcome = self.source.fetch_queue().await;
        self.apply(&cancel, cycle, outcome);
    }

    /// Publishes the outcome of `cycle` unless stopped or superseded
    fn apply(
        &self,
        cancel: &CancellationToken,
        cycle: u64,
        outcome: Result<Vec<JobRecord>, ClientError>,
    ) {
        let mut published = self.lock();

        if cancel.is_cancelled() {
            debug!("Discarding result of poll cycle {} after stop", cycle);
            return;
        }

        if cycle < published.cycle {
            debug!(
                "Discarding result of poll cycle {} (cycle {} already applied)",
                cycle, published.cycle
            );
            return;
        }

        let next = match outcome {
            Ok(jobs) => {
                debug!("Poll cycle {} fetched {} job(s)", cycle, jobs.len());
                published.state.succeeded(jobs, Local::now())
            }
            Err(e) => {
                warn!("Poll cycle {} failed: {}", cycle, e);
                published.state.failed(e.to_string())
            }
        };

        published.state = Arc::new(next);
        published.cycle = cycle;

        self.sink.state_changed(&published.state);
    }
}
