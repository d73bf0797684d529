//=========================================================================
// Execution Loop
//=========================================================================
//
// Background cadence driver bound to one shared GameLifecycle.
//
// Each tick:
//  1. Stops if the game is over
//  2. Measures wall time since the previous tick
//  3. Under the game lock: update + draw + scene requests (if it can run)
//  4. Waits out the rest of the tick interval
//
// Stepping is elapsed-time based: a slow tick is not replayed, its time
// lands in the next update. A tick longer than the interval starts the
// next one immediately. Ticks skipped while paused still measure, so
// paused time is never delivered to a scene.
//
// The wait listens on a wake channel. A wake (sent by end()) or a
// disconnect is a no-op: the loop just re-checks at the top.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::error::{Result, RuntimeError};
use crate::core::lifecycle::GameLifecycle;
use crate::core::scene::SceneKey;

//=== Shared State ========================================================

/// The game lock: one mutex around the whole lifecycle.
pub(crate) type SharedLifecycle<S> = Arc<Mutex<GameLifecycle<S>>>;

/// Locks the lifecycle, recovering from a scene that panicked mid-tick.
pub(crate) fn lock<S: SceneKey>(shared: &Mutex<GameLifecycle<S>>) -> MutexGuard<'_, GameLifecycle<S>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

//=== LoopHandle ==========================================================

/// Owned handle to a running execution loop.
#[derive(Debug)]
pub struct LoopHandle {
    handle: JoinHandle<Result<()>>,
}

impl LoopHandle {
    /// Returns true once the loop thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the loop to exit and returns its outcome.
    ///
    /// # Errors
    ///
    /// The update/draw failure that stopped the loop, or
    /// [`RuntimeError::LoopPanicked`].
    pub fn join(self) -> Result<()> {
        self.handle.join().map_err(|_| RuntimeError::LoopPanicked)?
    }
}

//=== ExecutionLoop =======================================================

pub(crate) struct ExecutionLoop<S: SceneKey> {
    lifecycle: SharedLifecycle<S>,
    interval: Duration,
    wake: Receiver<()>,
}

impl<S: SceneKey> ExecutionLoop<S> {
    pub(crate) fn new(lifecycle: SharedLifecycle<S>, interval: Duration, wake: Receiver<()>) -> Self {
        Self {
            lifecycle,
            interval,
            wake,
        }
    }

    /// Spawns the loop on a named thread.
    pub(crate) fn spawn(self, thread_name: &str) -> Result<LoopHandle> {
        let handle = thread::Builder::new()
            .name(thread_name.to_string())
            .spawn(move || self.run())
            .map_err(RuntimeError::LoopSpawn)?;

        info!("Execution loop spawned on thread '{}'", thread_name);
        Ok(LoopHandle { handle })
    }

    fn run(self) -> Result<()> {
        info!("Execution loop running (interval: {:?})", self.interval);
        let mut last_tick = Instant::now();

        loop {
            //--- Step 1: Stop once the game is over ------------------------
            if lock(&self.lifecycle).is_over() {
                break;
            }

            //--- Step 2: Measure ----------------------------------------
            let now = Instant::now();
            let elapsed = now.duration_since(last_tick);
            last_tick = now;

            //--- Step 3: Update + draw as one critical section ----------
            {
                let mut lifecycle = lock(&self.lifecycle);
                if lifecycle.can_update() {
                    if let Err(e) = lifecycle.tick(elapsed) {
                        error!("Tick failed, stopping execution loop: {}", e);
                        return Err(e);
                    }
                }
            }

            //--- Step 4: Wait out the rest of the interval ----------------
            self.idle(self.interval.saturating_sub(now.elapsed()));
        }

        info!("Execution loop exited");
        Ok(())
    }

    fn idle(&self, wait: Duration) {
        if wait.is_zero() {
            return;
        }

        match self.wake.recv_timeout(wait) {
            Ok(()) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => thread::sleep(wait),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
